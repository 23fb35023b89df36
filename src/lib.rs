//! Async Rust client for the Adobe Developer Console REST API.
//!
//! Public API layers:
//! - [`ConsoleClient`]: one named async method per console operation, built on
//!   a single generic [`ConsoleClient::invoke`] driven by [`endpoints`].
//! - [`Transport`]/[`HttpTransport`]: executes `OpenAPI` operations over HTTP,
//!   with [`RequestInterceptor`] injecting the session credentials.
//! - [`ConsoleError`]: the error every façade method returns, tagged with a
//!   stable [`ErrorCode`]; [`TransportError`] is its underlying cause.
//!
//! The `OpenAPI` operation registry is generated at build time from
//! `openapi/api.json`.

mod api;
mod client;
mod config;
pub mod endpoints;
mod error;
mod interceptors;
pub mod models;
mod openapi;
mod request;
mod sdk_errors;
mod transport;

#[cfg(test)]
mod testing;

/// `appType` and `assetType` values sent to the app registry.
pub use api::{APP_REGISTRY_APP_TYPE, ICON_ASSET_TYPE};
/// The console API façade.
pub use client::ConsoleClient;
pub use config::{ACCESS_TOKEN_ENV, API_KEY_ENV, ClientConfig, ENVIRONMENT_ENV, Environment};
/// Failures of the transport layer.
pub use error::TransportError;
pub use interceptors::{OutgoingBody, OutgoingRequest, RequestInterceptor, on_response};
/// Operation registry generated from `openapi/api.json`.
pub use openapi::{
    OperationDefinition, ParameterDefinition, ParameterLocation, RequestBodyKind,
    openapi_default_server_url, operations,
};
pub use request::{
    API_KEY_PARAMETER, AUTHORIZATION_PARAMETER, AUTHORIZATION_PLACEHOLDER, FilePart,
    MultipartPayload, ParameterValue, Parameters, RequestBody, RequestOptions,
    build_request_options,
};
/// SDK error taxonomy.
pub use sdk_errors::{
    ConsoleError, ErrorCode, ReducedError, SDK_ERROR_NAME, SDK_NAMESPACE, SdkDetails,
    UnknownErrorCode, reduce_error,
};
pub use transport::{ApiResponse, HttpTransport, Transport};
