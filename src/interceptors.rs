//! Hooks run by [`crate::HttpTransport`] around every HTTP exchange.

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use url::Url;

use crate::error::TransportError;
use crate::request::API_KEY_PARAMETER;
use crate::transport::ApiResponse;

/// Payload of an outgoing request.
#[derive(Debug)]
pub enum OutgoingBody {
    Empty,
    Json(Value),
    Multipart(reqwest::multipart::Form),
}

/// A fully rendered request, before it is handed to `reqwest`.
#[derive(Debug)]
pub struct OutgoingRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: OutgoingBody,
}

impl OutgoingRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: OutgoingBody::Empty,
        }
    }

    fn log(&self) {
        let headers: Vec<_> = self
            .headers
            .iter()
            .map(|(name, value)| {
                let value = if name == AUTHORIZATION {
                    "Bearer <redacted>"
                } else {
                    value.to_str().unwrap_or("<binary>")
                };
                format!("{name}: {value}")
            })
            .collect();
        let body = match &self.body {
            OutgoingBody::Empty => String::new(),
            OutgoingBody::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            OutgoingBody::Multipart(_) => "<multipart form>".to_owned(),
        };
        tracing::debug!(
            "REQUEST:\n{} {}\n{}\n{}",
            self.method,
            self.url,
            headers.join("\n"),
            body
        );
    }
}

/// Rewrites the request host and injects credentials right before send.
///
/// Built once per client session; holds copies of the session credentials.
#[derive(Clone)]
pub struct RequestInterceptor {
    host: String,
    access_token: String,
    api_key: String,
}

impl std::fmt::Debug for RequestInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestInterceptor")
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}

impl RequestInterceptor {
    /// `host` may carry a port (`localhost:8080`).
    pub fn new(
        host: impl Into<String>,
        access_token: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            access_token: access_token.into(),
            api_key: api_key.into(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn intercept(&self, mut request: OutgoingRequest) -> Result<OutgoingRequest, TransportError> {
        rewrite_host(&mut request.url, &self.host)?;

        if !request.headers.contains_key(CONTENT_TYPE) {
            request
                .headers
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.access_token))
            .map_err(|_| TransportError::InvalidHeader(AUTHORIZATION.to_string()))?;
        request.headers.insert(AUTHORIZATION, bearer);

        let api_key_header = HeaderName::from_static(API_KEY_PARAMETER);
        if !self.api_key.is_empty() && !request.headers.contains_key(&api_key_header) {
            let api_key = HeaderValue::from_str(&self.api_key)
                .map_err(|_| TransportError::InvalidHeader(API_KEY_PARAMETER.to_owned()))?;
            request.headers.insert(api_key_header, api_key);
        }

        request.log();
        Ok(request)
    }
}

fn rewrite_host(url: &mut Url, host: &str) -> Result<(), TransportError> {
    let invalid = || TransportError::InvalidHost(host.to_owned());

    let (name, port) = match host.rsplit_once(':') {
        Some((name, port)) if !name.ends_with(':') => {
            (name, Some(port.parse::<u16>().map_err(|_| invalid())?))
        }
        _ => (host, None),
    };

    url.set_host(Some(name)).map_err(|_| invalid())?;
    if let Some(port) = port {
        url.set_port(Some(port)).map_err(|()| invalid())?;
    }
    Ok(())
}

/// Logs an incoming response; never alters or rejects it.
pub fn on_response(response: &ApiResponse) {
    if let Ok(rendered) = serde_json::to_string_pretty(response) {
        tracing::debug!("RESPONSE:\n{rendered}");
    }

    if response.ok {
        match serde_json::from_str::<Value>(&response.text)
            .and_then(|data| serde_json::to_string_pretty(&data))
        {
            Ok(pretty) => tracing::debug!("DATA:\n{pretty}"),
            Err(_) => tracing::debug!("DATA:\n{}", response.text),
        }
    }
}
