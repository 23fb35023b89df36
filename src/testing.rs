//! In-memory transport and assertions shared by façade tests.

use std::future::Future;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use crate::client::ConsoleClient;
use crate::config::ClientConfig;
use crate::endpoints::Endpoint;
use crate::error::TransportError;
use crate::openapi::OperationDefinition;
use crate::request::{Parameters, RequestBody, RequestOptions, build_request_options};
use crate::sdk_errors::{ConsoleError, reduce_error};
use crate::transport::{ApiResponse, Transport};

pub(crate) const ACCESS_TOKEN: &str = "accessToken";
pub(crate) const API_KEY: &str = "apiKey";

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RecordedCall {
    pub operation_id: &'static str,
    pub options: RequestOptions,
}

#[derive(Debug)]
enum Outcome {
    Resolve(ApiResponse),
    /// Fails with [`TransportError::HttpStatus`] carrying this response.
    Reject(ApiResponse),
}

/// Records every call and answers with a fixed outcome.
#[derive(Debug)]
pub(crate) struct MockTransport {
    outcome: Outcome,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub(crate) fn resolving(response: ApiResponse) -> Self {
        Self {
            outcome: Outcome::Resolve(response),
            calls: Mutex::default(),
        }
    }

    pub(crate) fn resolving_empty() -> Self {
        Self::resolving(ApiResponse {
            ok: true,
            status: 200,
            status_text: "OK".to_owned(),
            ..ApiResponse::default()
        })
    }

    pub(crate) fn rejecting(response: ApiResponse) -> Self {
        Self {
            outcome: Outcome::Reject(response),
            calls: Mutex::default(),
        }
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(
        &self,
        operation: &'static OperationDefinition,
        options: RequestOptions,
    ) -> Result<ApiResponse, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall {
            operation_id: operation.operation_id,
            options,
        });
        match &self.outcome {
            Outcome::Resolve(response) => Ok(response.clone()),
            Outcome::Reject(response) => Err(TransportError::HttpStatus {
                response: Box::new(response.clone()),
            }),
        }
    }
}

pub(crate) fn client_with(transport: Arc<MockTransport>) -> ConsoleClient {
    let config = ClientConfig::new(Some(ACCESS_TOKEN), API_KEY, Some("prod")).with_transport(transport);
    ConsoleClient::init_with_config(config).unwrap()
}

pub(crate) fn success_response() -> ApiResponse {
    ApiResponse {
        url: "https://developers.adobe.io/console".to_owned(),
        ok: true,
        status: 200,
        status_text: "OK".to_owned(),
        body: json!({ "result": "success" }),
        text: r#"{"result":"success"}"#.to_owned(),
        ..ApiResponse::default()
    }
}

pub(crate) fn failure_response() -> ApiResponse {
    ApiResponse {
        status: 500,
        status_text: "Internal Server Error".to_owned(),
        body: json!({ "error": "boom" }),
        text: r#"{"error":"boom"}"#.to_owned(),
        ..ApiResponse::default()
    }
}

/// Checks the contract every façade operation shares.
///
/// On success the transport response comes back unchanged and the transport
/// saw `parameters` merged with the session defaults plus `body`. On failure the
/// endpoint's error code is raised, its details carry the parameters the
/// transport saw and its message is the reduced failure.
pub(crate) async fn assert_operation<F, Fut>(
    endpoint: &Endpoint,
    parameters: Parameters,
    body: Option<RequestBody>,
    call: F,
) where
    F: Fn(ConsoleClient) -> Fut,
    Fut: Future<Output = Result<ApiResponse, ConsoleError>>,
{
    let expected = build_request_options(API_KEY, parameters, body);

    let transport = Arc::new(MockTransport::resolving(success_response()));
    let response = call(client_with(transport.clone()))
        .await
        .unwrap_or_else(|error| panic!("{} failed: {error}", endpoint.name));
    assert_eq!(response, success_response(), "{}", endpoint.name);
    assert_eq!(
        transport.calls(),
        vec![RecordedCall {
            operation_id: endpoint.operation_id,
            options: expected.clone(),
        }],
        "{}",
        endpoint.name
    );

    let transport = Arc::new(MockTransport::rejecting(failure_response()));
    let error = call(client_with(transport.clone()))
        .await
        .expect_err(endpoint.name);
    let calls = transport.calls();
    assert_eq!(calls.len(), 1, "{}", endpoint.name);
    assert_eq!(error.code(), endpoint.error, "{}", endpoint.name);
    assert_eq!(error.sdk_details().parameters, calls[0].options.parameters);
    assert_eq!(
        error.sdk_details().request_body,
        expected.request_body.as_ref().map(RequestBody::describe)
    );

    let rejected = TransportError::HttpStatus {
        response: Box::new(failure_response()),
    };
    assert_eq!(error.message(), reduce_error(&rejected).to_string());
}
