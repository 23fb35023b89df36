use thiserror::Error;

use crate::transport::ApiResponse;

/// Errors raised while building, sending or reading one HTTP exchange.
///
/// Façade methods never return these directly; they are reduced and wrapped
/// into a [`crate::ConsoleError`].
#[derive(Debug, Error)]
pub enum TransportError {
    /// Base URL is not a valid absolute URL.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// Endpoint path could not be joined to the base URL.
    #[error("invalid endpoint path '{0}'")]
    InvalidPath(String),

    /// The requested `OpenAPI` operation id is not present in the generated catalog.
    #[error("unknown OpenAPI operation '{0}'")]
    UnknownOperation(String),

    /// A parameter the operation declares as required was not provided.
    #[error("Required parameter {parameter} is not provided")]
    MissingParameter {
        operation_id: String,
        parameter: String,
    },

    /// The configured API host cannot be applied to the request URL.
    #[error("invalid API host '{0}'")]
    InvalidHost(String),

    /// A parameter value cannot be sent as an HTTP header.
    #[error("invalid value for header '{0}'")]
    InvalidHeader(String),

    /// HTTP transport-layer request failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Request or response body could not be (de)serialized as JSON.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success HTTP status with the normalized response.
    #[error("server returned status {} {}", .response.status, .response.status_text)]
    HttpStatus { response: Box<ApiResponse> },
}
