//! Typed request payloads accepted by the façade.
//!
//! Every façade method taking a body accepts anything `Serialize`; these types
//! cover the shapes the console documents for projects, workspaces and
//! Adobe ID integrations.

use serde::{Deserialize, Serialize};

/// Project type that marks a Firefly (App Builder) project.
pub const FIREFLY_PROJECT_TYPE: &str = "jaeger";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    pub name: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub who_created: Option<String>,
    pub description: String,
    /// `default` or [`FIREFLY_PROJECT_TYPE`].
    #[serde(rename = "type")]
    pub project_type: String,
}

impl ProjectDetails {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            project_type: "default".to_owned(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceDetails {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub who_created: Option<String>,
    pub description: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub workspace_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_rule: Option<String>,
}

impl WorkspaceDetails {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }
}

/// Body of Adobe ID credential and integration requests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationDetails {
    pub name: String,
    pub description: String,
    /// `WebApp`, `SinglePageApp` or `NativeApp`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_redirect_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_info: Option<String>,
}
