use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::error::TransportError;
use crate::request::Parameters;

/// Where a declared parameter travels on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
}

/// Request body accepted by an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestBodyKind {
    None,
    Json,
    Multipart,
}

/// One parameter declared by an `OpenAPI` operation.
#[derive(Clone, Copy, Debug)]
pub struct ParameterDefinition {
    pub name: &'static str,
    pub location: ParameterLocation,
    pub required: bool,
}

/// Metadata for one `OpenAPI` operation.
///
/// Values are generated from `openapi/api.json` at build time.
#[derive(Clone, Copy, Debug)]
pub struct OperationDefinition {
    /// Stable `OpenAPI` operation identifier.
    pub operation_id: &'static str,
    /// First tag of the operation (`projects`, `AppRegistry`, ...).
    pub tag: &'static str,
    /// Uppercase HTTP method (for example `GET`, `POST`).
    pub method: &'static str,
    /// Path template, potentially containing `{param}` placeholders.
    pub path_template: &'static str,
    /// Every path, query and header parameter the operation declares.
    pub parameters: &'static [ParameterDefinition],
    pub request_body: RequestBodyKind,
}

impl OperationDefinition {
    /// Returns the declared parameters travelling in `location`.
    pub fn parameters_in(
        &self,
        location: ParameterLocation,
    ) -> impl Iterator<Item = &'static ParameterDefinition> + use<> {
        self.parameters
            .iter()
            .filter(move |parameter| parameter.location == location)
    }

    /// Returns `true` when the operation declares a parameter called `name`.
    pub fn declares(&self, name: &str) -> bool {
        self.parameters.iter().any(|parameter| parameter.name == name)
    }
}

// Generated file contract (`$OUT_DIR/openapi_operations.rs`):
// 1. `OPENAPI_DEFAULT_SERVER_URL: &str`
//    - Default base URL resolved from `openapi/api.json` (`servers[0].url`).
// 2. `OPENAPI_OPERATIONS: &[OperationDefinition]`
//    - One entry per OpenAPI operation with its id, tag, method, path
//      template, declared parameters and request body kind.
//
// This contract is produced by `build.rs` and consumed by this module via `include!`.
include!(concat!(env!("OUT_DIR"), "/openapi_operations.rs"));

/// Returns all operations discovered from the `OpenAPI` spec.
pub fn operations() -> &'static [OperationDefinition] {
    OPENAPI_OPERATIONS
}

/// Returns the default server URL from the `OpenAPI` spec.
///
/// This is the first element of the `OpenAPI` `servers` array when present.
pub fn openapi_default_server_url() -> &'static str {
    OPENAPI_DEFAULT_SERVER_URL
}

pub(crate) fn find_operation(
    operation_id: &str,
) -> Result<&'static OperationDefinition, TransportError> {
    OPENAPI_OPERATIONS
        .iter()
        .find(|op| op.operation_id == operation_id)
        .ok_or_else(|| TransportError::UnknownOperation(operation_id.to_owned()))
}

/// Fails with the first required parameter missing from `parameters`.
pub(crate) fn check_required(
    operation: &OperationDefinition,
    parameters: &Parameters,
) -> Result<(), TransportError> {
    match operation
        .parameters
        .iter()
        .find(|declared| declared.required && !parameters.contains_key(declared.name))
    {
        Some(missing) => Err(TransportError::MissingParameter {
            operation_id: operation.operation_id.to_owned(),
            parameter: missing.name.to_owned(),
        }),
        None => Ok(()),
    }
}

pub(crate) fn render_path(
    operation: &OperationDefinition,
    parameters: &Parameters,
) -> Result<String, TransportError> {
    let mut rendered = operation.path_template.to_owned();

    for required_param in operation.parameters_in(ParameterLocation::Path) {
        let value = parameters.get(required_param.name).ok_or_else(|| {
            TransportError::MissingParameter {
                operation_id: operation.operation_id.to_owned(),
                parameter: required_param.name.to_owned(),
            }
        })?;

        let placeholder = format!("{{{}}}", required_param.name);
        rendered = rendered.replace(&placeholder, &encode_path_segment(&value.to_string()));
    }

    Ok(rendered)
}

/// Characters escaped inside one path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}
