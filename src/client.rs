use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{Instrument, Span};

use crate::config::{ClientConfig, Environment};
use crate::endpoints::Endpoint;
use crate::interceptors::RequestInterceptor;
use crate::openapi::openapi_default_server_url;
use crate::request::{Parameters, RequestBody, build_request_options};
use crate::sdk_errors::{ConsoleError, ErrorCode, SdkDetails};
use crate::transport::{ApiResponse, HttpTransport, Transport};

/// Async client for the Adobe Developer Console API.
///
/// A value of this type is always initialized: construction goes through
/// [`ConsoleClient::init`] or [`ConsoleClient::init_with_config`], which fail
/// without touching the network when credentials are missing. Cloning is cheap
/// and clones share the same transport.
#[derive(Clone)]
pub struct ConsoleClient {
    api_key: String,
    access_token: String,
    env: Environment,
    host: String,
    transport: Arc<dyn Transport>,
    span: Span,
}

impl fmt::Debug for ConsoleClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleClient")
            .field("env", &self.env)
            .field("host", &self.host)
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}

impl ConsoleClient {
    /// Initializes a client talking HTTP to the host of `env`.
    ///
    /// `env` is `prod` or `stage`; anything else selects prod.
    pub fn init(
        access_token: Option<&str>,
        api_key: impl Into<String>,
        env: Option<&str>,
    ) -> Result<Self, ConsoleError> {
        Self::init_with_config(ClientConfig::new(access_token, api_key, env))
    }

    /// Initializes a client from an explicit configuration.
    ///
    /// Fails with [`ErrorCode::SdkInitialization`] when the access token is
    /// missing or empty.
    pub fn init_with_config(config: ClientConfig) -> Result<Self, ConsoleError> {
        let host = config.resolved_host().to_owned();
        let ClientConfig {
            access_token,
            api_key,
            env,
            server_url,
            transport,
            ..
        } = config;

        let Some(access_token) = access_token.clone().filter(|token| !token.is_empty()) else {
            let sdk_details = SdkDetails {
                parameters: Parameters::new()
                    .with("accessToken", access_token.unwrap_or_default()),
                request_body: None,
            };
            return Err(ConsoleError::new(
                ErrorCode::SdkInitialization,
                sdk_details,
                &["accessToken"],
            ));
        };

        let transport: Arc<dyn Transport> = match transport {
            Some(transport) => transport,
            None => {
                let interceptor = RequestInterceptor::new(&host, &access_token, &api_key);
                let server_url = server_url.as_deref().unwrap_or(openapi_default_server_url());
                let http = HttpTransport::new(server_url, interceptor).map_err(|error| {
                    ConsoleError::from_transport(
                        ErrorCode::SdkInitialization,
                        SdkDetails::default(),
                        error,
                    )
                })?;
                Arc::new(http)
            }
        };

        let span = tracing::debug_span!("console_client", env = %env, host = %host);
        span.in_scope(|| tracing::debug!("client initialized"));

        Ok(Self {
            api_key,
            access_token,
            env,
            host,
            transport,
            span,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn env(&self) -> Environment {
        self.env
    }

    /// Host every request is sent to.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Calls `endpoint` with `parameters` and an optional body.
    ///
    /// The API key and the authorization placeholder are merged into the
    /// parameters first. Any failure is reported as the endpoint's error code,
    /// with the merged parameters as details.
    pub async fn invoke(
        &self,
        endpoint: &Endpoint,
        parameters: Parameters,
        body: Option<RequestBody>,
    ) -> Result<ApiResponse, ConsoleError> {
        let options = self.span.in_scope(|| {
            tracing::debug!(operation = endpoint.name, "calling {}", endpoint.operation_id);
            build_request_options(&self.api_key, parameters, body)
        });
        let sdk_details = SdkDetails {
            parameters: options.parameters.clone(),
            request_body: options.request_body.as_ref().map(RequestBody::describe),
        };

        let operation = match endpoint.operation() {
            Ok(operation) => operation,
            Err(error) => return Err(ConsoleError::from_transport(endpoint.error, sdk_details, error)),
        };

        self.transport
            .execute(operation, options)
            .instrument(self.span.clone())
            .await
            .map_err(|error| ConsoleError::from_transport(endpoint.error, sdk_details, error))
    }

    /// [`Self::invoke`] with `body` serialized as the JSON payload.
    pub(crate) async fn invoke_json<B>(
        &self,
        endpoint: &Endpoint,
        parameters: Parameters,
        body: &B,
    ) -> Result<ApiResponse, ConsoleError>
    where
        B: Serialize + Sync + ?Sized,
    {
        match serde_json::to_value(body) {
            Ok(value) => {
                self.invoke(endpoint, parameters, Some(RequestBody::Json(value)))
                    .await
            }
            Err(error) => {
                let options = build_request_options(&self.api_key, parameters, None);
                let sdk_details = SdkDetails {
                    parameters: options.parameters,
                    request_body: None,
                };
                Err(ConsoleError::from_transport(endpoint.error, sdk_details, error.into()))
            }
        }
    }
}
