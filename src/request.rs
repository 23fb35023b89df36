//! Request parameters, bodies and the request option builder.
//!
//! Every façade call assembles a [`Parameters`] map and an optional
//! [`RequestBody`], then passes both through [`build_request_options`] before
//! handing them to the transport.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Serialize;
use serde_json::{Value, json};

/// Parameter name carrying the API key.
pub const API_KEY_PARAMETER: &str = "x-api-key";
/// Header parameter every operation declares for the bearer token.
pub const AUTHORIZATION_PARAMETER: &str = "Authorization";
/// Stand-in for the bearer token; the request interceptor sets the real header.
pub const AUTHORIZATION_PLACEHOLDER: &str = "__placeholder__";

/// A scalar parameter value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Text(String),
    Number(i64),
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ParameterValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for ParameterValue {
    fn from(value: u32) -> Self {
        Self::Number(i64::from(value))
    }
}

/// Named request parameters, ordered by name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Parameters(BTreeMap<String, ParameterValue>);

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the map with `name` set to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParameterValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.0.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<ParameterValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// Binary content sent as one multipart file field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePart {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl FilePart {
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// Reads a file from disk, keeping its file name for the upload.
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map_or_else(|| "file".to_owned(), |name| name.to_string_lossy().into_owned());
        Ok(Self { file_name, content })
    }
}

/// A `multipart/form-data` payload: text fields plus one file field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultipartPayload {
    pub fields: Vec<(String, String)>,
    pub file_field: String,
    pub file: FilePart,
}

impl MultipartPayload {
    pub fn new(file_field: impl Into<String>, file: FilePart) -> Self {
        Self {
            fields: Vec::new(),
            file_field: file_field.into(),
            file,
        }
    }

    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }
}

/// Caller-provided payload attached to a request.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Json(Value),
    Multipart(MultipartPayload),
}

impl RequestBody {
    /// JSON view of the body used in error details; file content is summarized.
    pub fn describe(&self) -> Value {
        match self {
            Self::Json(value) => value.clone(),
            Self::Multipart(payload) => {
                let mut described = serde_json::Map::new();
                for (name, value) in &payload.fields {
                    described.insert(name.clone(), Value::String(value.clone()));
                }
                described.insert(
                    payload.file_field.clone(),
                    json!({
                        "fileName": payload.file.file_name,
                        "size": payload.file.content.len(),
                    }),
                );
                Value::Object(described)
            }
        }
    }
}

/// Merged parameters plus the body envelope handed to the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestOptions {
    pub parameters: Parameters,
    pub request_body: Option<RequestBody>,
}

/// Merges `parameters` with the API key and the authorization placeholder.
///
/// Caller-supplied entries win over the injected defaults. An empty `api_key`
/// is treated as absent and not injected. The body is passed through untouched.
pub fn build_request_options(
    api_key: &str,
    parameters: Parameters,
    body: Option<RequestBody>,
) -> RequestOptions {
    tracing::debug!(parameters = ?parameters, "building request options");

    let mut merged = Parameters::new().with(AUTHORIZATION_PARAMETER, AUTHORIZATION_PLACEHOLDER);
    if !api_key.is_empty() {
        merged.insert(API_KEY_PARAMETER, api_key);
    }
    merged.0.extend(parameters.0);

    RequestOptions {
        parameters: merged,
        request_body: body,
    }
}
