//! Named SDK errors raised by the console client.
//!
//! Every façade operation maps to exactly one [`ErrorCode`]; the mapping lives in
//! [`crate::endpoints`]. A [`ConsoleError`] carries that code, the parameters and
//! body of the failed call, and a message rendered from the code's template.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::error::TransportError;
use crate::request::Parameters;

/// Namespace tag shown in front of every rendered error.
pub const SDK_NAMESPACE: &str = "CoreConsoleAPISDK";

/// Name of the error family, as reported by [`ConsoleError::name`].
pub const SDK_ERROR_NAME: &str = "CoreConsoleAPIError";

macro_rules! error_codes {
    ($($variant:ident => $code:literal, $template:literal;)+) => {
        /// Stable identifier of one SDK error kind.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum ErrorCode {
            $($variant,)+
        }

        impl ErrorCode {
            /// Every registered code, in registration order.
            pub const ALL: &'static [ErrorCode] = &[$(ErrorCode::$variant,)+];

            /// Returns the code string (for example `ERROR_CREATE_PROJECT`).
            pub fn as_str(self) -> &'static str {
                match self {
                    $(ErrorCode::$variant => $code,)+
                }
            }

            /// Returns the message template; `%s` marks an interpolated value.
            pub fn message_template(self) -> &'static str {
                match self {
                    $(ErrorCode::$variant => $template,)+
                }
            }
        }

        impl FromStr for ErrorCode {
            type Err = UnknownErrorCode;

            fn from_str(code: &str) -> Result<Self, Self::Err> {
                match code {
                    $($code => Ok(ErrorCode::$variant),)+
                    other => Err(UnknownErrorCode(other.to_owned())),
                }
            }
        }
    };
}

error_codes! {
    SdkInitialization => "ERROR_SDK_INITIALIZATION", "SDK initialization error(s). Missing arguments: %s";
    GetOrganizations => "ERROR_GET_ORGANIZATIONS", "%s";
    CreateImsOrg => "ERROR_CREATE_IMS_ORG", "%s";
    GetServicesForOrg => "ERROR_GET_SERVICES_FOR_ORG", "%s";
    GetProjectsByOrgId => "ERROR_GET_PROJECTS_BY_ORG_ID", "%s";
    CreateProject => "ERROR_CREATE_PROJECT", "%s";
    GetProjectById => "ERROR_GET_PROJECT_BY_ID", "%s";
    EditProject => "ERROR_EDIT_PROJECT", "%s";
    DeleteProject => "ERROR_DELETE_PROJECT", "%s";
    GetWorkspacesByProjectId => "ERROR_GET_WORKSPACES_BY_PROJECT_ID", "%s";
    CreateWorkspace => "ERROR_CREATE_WORKSPACE", "%s";
    GetWorkspaceById => "ERROR_GET_WORKSPACE_BY_ID", "%s";
    EditWorkspace => "ERROR_EDIT_WORKSPACE", "%s";
    DeleteWorkspace => "ERROR_DELETE_WORKSPACE", "%s";
    DownloadWorkspaceJson => "ERROR_DOWNLOAD_WORKSPACE_JSON", "%s";
    GetCredentials => "ERROR_GET_CREDENTIALS", "%s";
    CreateEnterpriseCredential => "ERROR_CREATE_ENTERPRISE_CREDENTIAL", "%s";
    CreateAdobeIdCredential => "ERROR_CREATE_ADOBEID_CREDENTIAL", "%s";
    CreateAnalyticsCredential => "ERROR_CREATE_ANALYTICS_CREDENTIAL", "%s";
    SubscribeCredentialToServices => "ERROR_SUBSCRIBE_CREDENTIAL_TO_SERVICES", "%s";
    DeleteCredential => "ERROR_DELETE_CREDENTIAL", "%s";
    GetProjectWorkspaceByCredential => "ERROR_GET_PROJECT_WORKSPACE_BY_CREDENTIAL", "%s";
    GetProjectByWorkspace => "ERROR_GET_PROJECT_BY_WORKSPACE", "%s";
    GetPluginsByWorkspace => "ERROR_GET_PLUGINS_BY_WORKSPACE", "%s";
    CreateRuntimeNamespace => "ERROR_CREATE_RUNTIME_NAMESPACE", "%s";
    GetEndpoints => "ERROR_GET_ENDPOINTS", "%s";
    UpdateEndpoints => "ERROR_UPDATE_ENDPOINTS", "%s";
    GetIntegrationsByOrg => "ERROR_GET_INTEGRATIONS_BY_ORG", "%s";
    CreateEnterpriseIntegration => "ERROR_CREATE_ENTERPRISE_INTEGRATION", "%s";
    CreateAdobeIdIntegration => "ERROR_CREATE_ADOBEID_INTEGRATION", "%s";
    UpdateAdobeIdIntegration => "ERROR_UPDATE_ADOBEID_INTEGRATION", "%s";
    SubscribeAdobeIdIntegrationToServices => "ERROR_SUBSCRIBE_ADOBEID_INTEGRATION_TO_SERVICES", "%s";
    SubscribeEnterpriseIntegrationToServices => "ERROR_SUBSCRIBE_ENTERPRISE_INTEGRATION_TO_SERVICES", "%s";
    GetBindingsForIntegration => "ERROR_GET_BINDINGS_FOR_INTEGRATION", "%s";
    UploadAndBindCertificate => "ERROR_UPLOAD_AND_BIND_CERTIFICATE", "%s";
    DeleteBinding => "ERROR_DELETE_BINDING", "%s";
    GetIntegration => "ERROR_GET_INTEGRATION", "%s";
    GetIntegrationSecrets => "ERROR_GET_INTEGRATION_SECRETS", "%s";
    DeleteIntegration => "ERROR_DELETE_INTEGRATION", "%s";
    GetAtlasApplicationPolicy => "ERROR_GET_ATLAS_APPLICATION_POLICY", "%s";
    GetAtlasQuotaUsage => "ERROR_GET_ATLAS_QUOTA_USAGE", "%s";
    ValidateApplicationName => "ERROR_VALIDATE_APPLICATION_NAME", "%s";
    GetApplicationById => "ERROR_GET_APPLICATION_BY_ID", "%s";
    UpdateApplication => "ERROR_UPDATE_APPLICATION", "%s";
    DeleteApplication => "ERROR_DELETE_APPLICATION", "%s";
    GetApplicationByName => "ERROR_GET_APPLICATION_BY_NAME", "%s";
    SubmitApplication => "ERROR_SUBMIT_APPLICATION", "%s";
    GetAllApplicationsForUser => "ERROR_GET_ALL_APPLICATIONS_FOR_USER", "%s";
    UploadApplicationIcon => "ERROR_UPLOAD_APPLICATION_ICON", "%s";
    GetAppRegistryHealth => "ERROR_GET_APPREGISTRY_HEALTH", "%s";
    GetAllExtensionPoints => "ERROR_GET_ALL_EXTENSION_POINTS", "%s";
    GetApplicationExtensions => "ERROR_GET_APPLICATION_EXTENSIONS", "%s";
    GetDevTerms => "ERROR_GET_DEV_TERMS", "%s";
    CheckOrgDevTerms => "ERROR_CHECK_ORG_DEV_TERMS", "%s";
    AcceptOrgDevTerms => "ERROR_ACCEPT_ORG_DEV_TERMS", "%s";
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a string that is not a registered code.
#[derive(Debug, Error)]
#[error("unknown SDK error code '{0}'")]
pub struct UnknownErrorCode(pub String);

/// Context of the call that failed.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SdkDetails {
    pub parameters: Parameters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<Value>,
}

/// A named, catchable SDK error.
#[derive(Debug, Error)]
#[error("[{}:{}] {}", SDK_NAMESPACE, .code, .message)]
pub struct ConsoleError {
    code: ErrorCode,
    sdk_details: SdkDetails,
    message: String,
    #[source]
    source: Option<TransportError>,
}

impl ConsoleError {
    /// Builds an error, interpolating `message_values` into the code's template.
    pub fn new<V: fmt::Display>(
        code: ErrorCode,
        sdk_details: SdkDetails,
        message_values: &[V],
    ) -> Self {
        Self {
            code,
            sdk_details,
            message: render_template(code.message_template(), message_values),
            source: None,
        }
    }

    /// Wraps a transport failure: the reduced failure is the single message value.
    pub fn from_transport(code: ErrorCode, sdk_details: SdkDetails, error: TransportError) -> Self {
        let message = render_template(code.message_template(), &[reduce_error(&error)]);
        Self {
            code,
            sdk_details,
            message,
            source: Some(error),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn sdk_details(&self) -> &SdkDetails {
        &self.sdk_details
    }

    /// The rendered message, without namespace and code.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn name(&self) -> &'static str {
        SDK_ERROR_NAME
    }

    /// The transport failure behind this error, if any.
    pub fn transport_error(&self) -> Option<&TransportError> {
        self.source.as_ref()
    }
}

/// A transport failure collapsed for embedding in an error message.
#[derive(Debug)]
pub enum ReducedError<'a> {
    /// `"<status> - <statusText> (<json body>)"`.
    Summary(String),
    /// The failure had no complete HTTP response; it is kept as is.
    Unchanged(&'a TransportError),
}

impl fmt::Display for ReducedError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Summary(summary) => f.write_str(summary),
            Self::Unchanged(error) => write!(f, "{error}"),
        }
    }
}

/// Collapses a failure carrying a complete HTTP response into one string.
///
/// A response is complete when it has a status, a status text and a body.
pub fn reduce_error(error: &TransportError) -> ReducedError<'_> {
    if let TransportError::HttpStatus { response } = error {
        if response.status != 0 && !response.status_text.is_empty() && !response.body.is_null() {
            return ReducedError::Summary(format!(
                "{} - {} ({})",
                response.status, response.status_text, response.body
            ));
        }
    }
    ReducedError::Unchanged(error)
}

fn render_template<V: fmt::Display>(template: &str, values: &[V]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut values = values.iter();
    let mut pieces = template.split("%s");

    if let Some(first) = pieces.next() {
        rendered.push_str(first);
    }
    for piece in pieces {
        match values.next() {
            Some(value) => rendered.push_str(&value.to_string()),
            None => rendered.push_str("%s"),
        }
        rendered.push_str(piece);
    }
    rendered
}
