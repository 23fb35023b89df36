use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, Url};
use serde::Serialize;
use serde_json::Value;

use crate::error::TransportError;
use crate::interceptors::{OutgoingBody, OutgoingRequest, RequestInterceptor, on_response};
use crate::openapi::{
    OperationDefinition, ParameterLocation, check_required, openapi_default_server_url,
    render_path,
};
use crate::request::{AUTHORIZATION_PARAMETER, MultipartPayload, RequestBody, RequestOptions};

/// Normalized result of one HTTP exchange.
///
/// `ok` is `true` exactly when `status` is in the 2xx range.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub url: String,
    pub ok: bool,
    pub status: u16,
    pub status_text: String,
    pub headers: BTreeMap<String, String>,
    /// Parsed JSON payload; the raw text as a string when it is not JSON,
    /// `null` when empty.
    pub body: Value,
    /// Raw response text.
    pub text: String,
}

impl ApiResponse {
    /// Alias of [`ApiResponse::text`].
    pub fn data(&self) -> &str {
        &self.text
    }
}

/// Executes one `OpenAPI` operation.
///
/// [`HttpTransport`] is the production implementation; tests substitute their
/// own through [`crate::ClientConfig::with_transport`].
#[async_trait]
pub trait Transport: fmt::Debug + Send + Sync {
    async fn execute(
        &self,
        operation: &'static OperationDefinition,
        options: RequestOptions,
    ) -> Result<ApiResponse, TransportError>;
}

/// HTTP transport driven by the `OpenAPI` operation registry.
///
/// Renders each operation from its definition and the merged parameters, runs
/// the request interceptor, sends the request with `reqwest` and normalizes the
/// response.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    base_url: Url,
    interceptor: RequestInterceptor,
    http: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport rooted at `base_url`.
    ///
    /// The URL is normalized to include a trailing slash, so operation paths
    /// join correctly.
    pub fn new(
        base_url: impl AsRef<str>,
        interceptor: RequestInterceptor,
    ) -> Result<Self, TransportError> {
        let parsed = Url::parse(base_url.as_ref())
            .map_err(|_| TransportError::InvalidBaseUrl(base_url.as_ref().to_owned()))?;

        Ok(Self {
            base_url: ensure_trailing_slash(parsed),
            interceptor,
            http: reqwest::Client::new(),
        })
    }

    /// Creates a transport using the first server URL from the `OpenAPI` spec.
    pub fn from_openapi_default_server(
        interceptor: RequestInterceptor,
    ) -> Result<Self, TransportError> {
        Self::new(openapi_default_server_url(), interceptor)
    }

    /// Returns a transport sending through `http` instead of a default client.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    fn render(
        &self,
        operation: &OperationDefinition,
        options: RequestOptions,
    ) -> Result<OutgoingRequest, TransportError> {
        let RequestOptions {
            parameters,
            request_body,
        } = options;

        check_required(operation, &parameters)?;

        let path = render_path(operation, &parameters)?;
        let mut url = self.build_url(&path)?;

        let query: Vec<(&str, String)> = operation
            .parameters_in(ParameterLocation::Query)
            .filter_map(|declared| {
                parameters
                    .get(declared.name)
                    .map(|value| (declared.name, value.to_string()))
            })
            .collect();
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        let method = Method::from_bytes(operation.method.as_bytes())
            .map_err(|_| TransportError::UnknownOperation(operation.operation_id.to_owned()))?;
        let mut request = OutgoingRequest::new(method, url);
        request
            .headers
            .insert(ACCEPT, HeaderValue::from_static("application/json"));

        // Authorization is set by the interceptor, never from parameters.
        for declared in operation
            .parameters_in(ParameterLocation::Header)
            .filter(|declared| declared.name != AUTHORIZATION_PARAMETER)
        {
            let Some(value) = parameters.get(declared.name) else {
                continue;
            };
            let name = HeaderName::from_bytes(declared.name.as_bytes())
                .map_err(|_| TransportError::InvalidHeader(declared.name.to_owned()))?;
            let value = HeaderValue::from_str(&value.to_string())
                .map_err(|_| TransportError::InvalidHeader(declared.name.to_owned()))?;
            request.headers.insert(name, value);
        }

        match request_body {
            None => {}
            Some(RequestBody::Json(value)) => request.body = OutgoingBody::Json(value),
            Some(RequestBody::Multipart(payload)) => {
                let form = multipart_form(payload);
                let content_type = format!("multipart/form-data; boundary={}", form.boundary());
                let content_type = HeaderValue::from_str(&content_type)
                    .map_err(|_| TransportError::InvalidHeader(CONTENT_TYPE.to_string()))?;
                request.headers.insert(CONTENT_TYPE, content_type);
                request.body = OutgoingBody::Multipart(form);
            }
        }

        Ok(request)
    }

    async fn send(&self, request: OutgoingRequest) -> Result<ApiResponse, TransportError> {
        let OutgoingRequest {
            method,
            url,
            mut headers,
            body,
        } = request;

        let is_multipart = matches!(body, OutgoingBody::Multipart(_));
        let builder = self.http.request(method, url);
        let builder = match body {
            OutgoingBody::Empty => builder.headers(headers),
            OutgoingBody::Json(value) => builder.headers(headers).body(serde_json::to_vec(&value)?),
            OutgoingBody::Multipart(form) => {
                // reqwest writes the boundary header itself
                headers.remove(CONTENT_TYPE);
                builder.headers(headers).multipart(form)
            }
        };

        let response = builder.send().await?;
        let status = response.status();
        let url = response.url().to_string();
        let headers = collect_headers(response.headers());
        let text = response.text().await?;

        let normalized = ApiResponse {
            url,
            ok: status.is_success(),
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_owned(),
            headers,
            body: parse_body(&text),
            text,
        };
        on_response(&normalized);

        // multipart uploads must answer with JSON
        if is_multipart && normalized.ok {
            serde_json::from_str::<Value>(&normalized.text)?;
        }

        if normalized.ok {
            Ok(normalized)
        } else {
            Err(TransportError::HttpStatus {
                response: Box::new(normalized),
            })
        }
    }

    fn build_url(&self, path: &str) -> Result<Url, TransportError> {
        let relative = path.trim_start_matches('/');
        self.base_url
            .join(relative)
            .map_err(|_| TransportError::InvalidPath(path.to_owned()))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        operation: &'static OperationDefinition,
        options: RequestOptions,
    ) -> Result<ApiResponse, TransportError> {
        let request = self.render(operation, options)?;
        let request = self.interceptor.intercept(request)?;
        self.send(request).await
    }
}

fn multipart_form(payload: MultipartPayload) -> Form {
    let MultipartPayload {
        fields,
        file_field,
        file,
    } = payload;

    let part = Part::bytes(file.content).file_name(file.file_name);
    fields
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value))
        .part(file_field, part)
}

fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()))
    }
}

fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_owned(), value.to_owned()))
        })
        .collect()
}

fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let mut path = url.path().to_owned();
        path.push('/');
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::{HttpTransport, Transport};
    use crate::error::TransportError;
    use crate::interceptors::RequestInterceptor;
    use crate::openapi::find_operation;
    use crate::request::{
        FilePart, MultipartPayload, Parameters, RequestBody, RequestOptions,
        build_request_options,
    };

    fn transport_for(server: &MockServer) -> HttpTransport {
        let host = server.address().to_string();
        HttpTransport::new(
            server.uri(),
            RequestInterceptor::new(host, "test-token", "session-key"),
        )
        .expect("valid url")
    }

    fn options(parameters: Parameters, body: Option<RequestBody>) -> RequestOptions {
        build_request_options("test-apikey", parameters, body)
    }

    #[test]
    fn joins_paths_from_base_with_nested_prefix() {
        let transport = HttpTransport::new(
            "https://example.com/api/v1",
            RequestInterceptor::new("example.com", "t", "k"),
        )
        .expect("valid url");
        let resolved = transport.build_url("items").expect("valid path");
        assert_eq!(resolved.as_str(), "https://example.com/api/v1/items");
    }

    #[test]
    fn defaults_to_openapi_server() {
        let transport =
            HttpTransport::from_openapi_default_server(RequestInterceptor::new("h", "t", "k"))
                .expect("valid url")
                .with_http_client(reqwest::Client::new());
        assert_eq!(transport.base_url.as_str(), "https://developers-stage.adobe.io/");
    }

    #[test]
    fn rejects_invalid_base_url() {
        let error = HttpTransport::new("not a url", RequestInterceptor::new("h", "t", "k"))
            .unwrap_err();
        assert!(matches!(error, TransportError::InvalidBaseUrl(url) if url == "not a url"));
    }

    #[tokio::test]
    async fn sends_credentials_and_parses_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/console/organizations/42/projects"))
            .and(header("x-api-key", "test-apikey"))
            .and(header("authorization", "Bearer test-token"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "p1" }])))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport_for(&server);
        let operation = find_operation("get_console_organizations__orgId__projects").unwrap();
        let response = transport
            .execute(operation, options(Parameters::new().with("orgId", "42"), None))
            .await
            .unwrap();

        assert!(response.ok);
        assert_eq!(response.status, 200);
        assert_eq!(response.status_text, "OK");
        assert_eq!(response.body, json!([{ "id": "p1" }]));
    }

    #[tokio::test]
    async fn sends_json_body_and_declared_query() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/console/organizations/42/apps/app-1"))
            .and(body_json(json!({ "name": "renamed" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "app-1" })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/console/organizations/42/apps"))
            .and(query_param("appType", "JGR"))
            .and(query_param("offset", "0"))
            .and(query_param("pageSize", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport_for(&server);

        let update = find_operation("patch_console_organizations__orgId__apps__appId_").unwrap();
        let parameters = Parameters::new().with("orgId", "42").with("appId", "app-1");
        let body = RequestBody::Json(json!({ "name": "renamed" }));
        transport
            .execute(update, options(parameters, Some(body)))
            .await
            .unwrap();

        let list = find_operation("get_console_organizations__orgId__apps").unwrap();
        let parameters = Parameters::new()
            .with("orgId", "42")
            .with("offset", 0_u32)
            .with("pageSize", 50_u32)
            .with("appType", "JGR")
            .with("undeclared", "ignored");
        transport.execute(list, options(parameters, None)).await.unwrap();

        let received = server.received_requests().await.unwrap();
        let list_request = received.iter().find(|r| r.method.as_str() == "GET").unwrap();
        assert!(!list_request.url.query().unwrap_or_default().contains("undeclared"));
    }

    #[tokio::test]
    async fn api_key_falls_back_to_session_when_not_declared() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/console/devterms"))
            .and(header("x-api-key", "session-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string("terms"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport_for(&server);
        let operation = find_operation("get_console_devterms").unwrap();
        let response = transport
            .execute(operation, options(Parameters::new(), None))
            .await
            .unwrap();
        assert_eq!(response.body, json!("terms"));
        assert_eq!(response.data(), "terms");
    }

    #[tokio::test]
    async fn error_status_carries_normalized_response() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "message": "no such project" })),
            )
            .mount(&server)
            .await;

        let transport = transport_for(&server);
        let operation =
            find_operation("delete_console_organizations__orgId__projects__projectId_").unwrap();
        let parameters = Parameters::new().with("orgId", "42").with("projectId", "7");
        let error = transport
            .execute(operation, options(parameters, None))
            .await
            .unwrap_err();

        match error {
            TransportError::HttpStatus { response } => {
                assert!(!response.ok);
                assert_eq!(response.status, 404);
                assert_eq!(response.status_text, "Not Found");
                assert_eq!(response.body, json!({ "message": "no such project" }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn missing_required_parameter_fails_before_sending() {
        let server = MockServer::start().await;
        let transport = transport_for(&server);
        let operation = find_operation("get_console_organizations").unwrap();
        let parameters = Parameters::new().with("Authorization", "__placeholder__");

        let error = transport
            .execute(operation, RequestOptions { parameters, request_body: None })
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "Required parameter x-api-key is not provided");
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn multipart_upload_uses_form_boundary() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/console/organizations/42/integrations/entp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "int-1" })))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport_for(&server);
        let operation = find_operation("post_console_organizations__orgId__integrations_entp")
            .unwrap();
        let payload = MultipartPayload::new("certificate", FilePart::new("cert.pem", "PEM DATA"))
            .field("name", "entp")
            .field("description", "an integration");
        let response = transport
            .execute(
                operation,
                options(
                    Parameters::new().with("orgId", "42"),
                    Some(RequestBody::Multipart(payload)),
                ),
            )
            .await
            .unwrap();
        assert_eq!(response.body, json!({ "id": "int-1" }));

        let received = server.received_requests().await.unwrap();
        let request = &received[0];
        let content_types: Vec<_> = request.headers.get_all("content-type").iter().collect();
        assert_eq!(content_types.len(), 1);
        assert!(
            content_types[0]
                .to_str()
                .unwrap()
                .starts_with("multipart/form-data; boundary=")
        );
        let body = String::from_utf8_lossy(&request.body);
        assert!(body.contains("name=\"certificate\"; filename=\"cert.pem\""));
        assert!(body.contains("PEM DATA"));
        assert!(body.contains("an integration"));
    }

    #[tokio::test]
    async fn multipart_upload_rejects_non_json_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let transport = transport_for(&server);
        let operation =
            find_operation("post_console_organizations__orgId__integrations__intId__bindings")
                .unwrap();
        let payload = MultipartPayload::new("certificate", FilePart::new("cert.pem", "PEM"));
        let error = transport
            .execute(
                operation,
                options(
                    Parameters::new().with("orgId", "42").with("intId", "9"),
                    Some(RequestBody::Multipart(payload)),
                ),
            )
            .await
            .unwrap_err();
        assert!(matches!(error, TransportError::Json(_)));
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn non_json_multipart_success_is_logged_before_failing() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let transport = transport_for(&server);
        let operation =
            find_operation("post_console_organizations__orgId__integrations__intId__bindings")
                .unwrap();
        let payload = MultipartPayload::new("certificate", FilePart::new("cert.pem", "PEM"));
        let error = transport
            .execute(
                operation,
                options(
                    Parameters::new().with("orgId", "42").with("intId", "9"),
                    Some(RequestBody::Multipart(payload)),
                ),
            )
            .await
            .unwrap_err();
        assert!(matches!(error, TransportError::Json(_)));

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("RESPONSE:"));
        assert!(output.contains("<html>not json</html>"));
    }
}
