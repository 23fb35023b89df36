//! Declarative table of façade operations.
//!
//! Each entry binds a façade method to one `OpenAPI` operation and to the error
//! code raised when that operation fails. Parameters and body acceptance come
//! from the operation definition in `openapi/api.json`.

use crate::error::TransportError;
use crate::openapi::{OperationDefinition, find_operation};
use crate::sdk_errors::ErrorCode;

/// Static descriptor of one façade operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoint {
    /// Façade method name.
    pub name: &'static str,
    pub operation_id: &'static str,
    pub error: ErrorCode,
}

impl Endpoint {
    /// Looks up the operation definition backing this endpoint.
    pub fn operation(&self) -> Result<&'static OperationDefinition, TransportError> {
        find_operation(self.operation_id)
    }
}

macro_rules! endpoints {
    ($($constant:ident: $name:literal => $operation_id:literal, $code:ident;)+) => {
        $(
            pub const $constant: Endpoint = Endpoint {
                name: $name,
                operation_id: $operation_id,
                error: ErrorCode::$code,
            };
        )+

        /// Every endpoint, in declaration order.
        pub const ALL: &[Endpoint] = &[$($constant,)+];
    };
}

endpoints! {
    GET_ORGANIZATIONS: "get_organizations" => "get_console_organizations", GetOrganizations;
    CREATE_IMS_ORG: "create_ims_org" => "post_console_organizations", CreateImsOrg;
    GET_SERVICES_FOR_ORG: "get_services_for_org" => "get_console_organizations__orgId__services", GetServicesForOrg;

    GET_PROJECTS_FOR_ORG: "get_projects_for_org" => "get_console_organizations__orgId__projects", GetProjectsByOrgId;
    CREATE_PROJECT: "create_project" => "post_console_organizations__orgId__projects", CreateProject;
    GET_PROJECT: "get_project" => "get_console_organizations__orgId__projects__projectId_", GetProjectById;
    EDIT_PROJECT: "edit_project" => "patch_console_organizations__orgId__projects__projectId_", EditProject;
    DELETE_PROJECT: "delete_project" => "delete_console_organizations__orgId__projects__projectId_", DeleteProject;
    GET_WORKSPACES_FOR_PROJECT: "get_workspaces_for_project" => "get_console_organizations__orgId__projects__projectId__workspaces", GetWorkspacesByProjectId;

    CREATE_WORKSPACE: "create_workspace" => "post_console_organizations__orgId__projects__projectId__workspaces", CreateWorkspace;
    GET_WORKSPACE: "get_workspace" => "get_console_organizations__orgId__projects__projectId__workspaces__workspaceId_", GetWorkspaceById;
    EDIT_WORKSPACE: "edit_workspace" => "patch_console_organizations__orgId__projects__projectId__workspaces__workspaceId_", EditWorkspace;
    DELETE_WORKSPACE: "delete_workspace" => "delete_console_organizations__orgId__projects__projectId__workspaces__workspaceId_", DeleteWorkspace;
    DOWNLOAD_WORKSPACE_JSON: "download_workspace_json" => "get_console_organizations__orgId__projects__projectId__workspaces__workspaceId__download", DownloadWorkspaceJson;
    GET_PROJECT_FOR_WORKSPACE: "get_project_for_workspace" => "get_console_organizations__orgId__projects_workspaces_workspaces__workspaceId_", GetProjectByWorkspace;
    GET_PLUGINS_FOR_WORKSPACE: "get_plugins_for_workspace" => "get_console_organizations__orgId__projects__projectId__workspaces__workspaceId__plugins", GetPluginsByWorkspace;
    CREATE_RUNTIME_NAMESPACE: "create_runtime_namespace" => "post_console_organizations__orgId__projects__projectId__workspaces__workspaceId__namespace", CreateRuntimeNamespace;

    GET_CREDENTIALS: "get_credentials" => "get_console_organizations__orgId__projects__projectId__workspaces__workspaceId__credentials", GetCredentials;
    CREATE_ENTERPRISE_CREDENTIAL: "create_enterprise_credential" => "post_console_organizations__orgId__projects__projectId__workspaces__workspaceId__credentials_entp", CreateEnterpriseCredential;
    CREATE_ADOBE_ID_CREDENTIAL: "create_adobe_id_credential" => "post_console_organizations__orgId__projects__projectId__workspaces__workspaceId__credentials_adobeId", CreateAdobeIdCredential;
    CREATE_ANALYTICS_CREDENTIAL: "create_analytics_credential" => "post_console_organizations__orgId__projects__projectId__workspaces__workspaceId__credentials_analytics", CreateAnalyticsCredential;
    SUBSCRIBE_CREDENTIAL_TO_SERVICES: "subscribe_credential_to_services" => "put_console_organizations__orgId__projects__projectId__workspaces__workspaceId__credentials__credentialType___credentialId__services", SubscribeCredentialToServices;
    DELETE_CREDENTIAL: "delete_credential" => "delete_console_organizations__orgId__projects__projectId__workspaces__workspaceId__credentials__credentialId_", DeleteCredential;
    GET_WORKSPACE_FOR_CREDENTIAL: "get_workspace_for_credential" => "get_console_organizations__orgId__projects_workspaces_credentials__credentialId_", GetProjectWorkspaceByCredential;

    GET_INTEGRATIONS_FOR_ORG: "get_integrations_for_org" => "get_console_organizations__orgId__integrations", GetIntegrationsByOrg;
    CREATE_ENTERPRISE_INTEGRATION: "create_enterprise_integration" => "post_console_organizations__orgId__integrations_entp", CreateEnterpriseIntegration;
    CREATE_ADOBE_ID_INTEGRATION: "create_adobe_id_integration" => "post_console_organizations__orgId__integrations_adobeId", CreateAdobeIdIntegration;
    UPDATE_ADOBE_ID_INTEGRATION: "update_adobe_id_integration" => "put_console_organizations__orgId__integrations_adobeId__intId_", UpdateAdobeIdIntegration;
    SUBSCRIBE_ADOBE_ID_INTEGRATION_TO_SERVICES: "subscribe_adobe_id_integration_to_services" => "put_console_organizations__orgId__integrations_adobeid__intId__services", SubscribeAdobeIdIntegrationToServices;
    SUBSCRIBE_ENTERPRISE_INTEGRATION_TO_SERVICES: "subscribe_enterprise_integration_to_services" => "put_console_organizations__orgId__integrations_entp__intId__services", SubscribeEnterpriseIntegrationToServices;
    GET_BINDINGS_FOR_INTEGRATION: "get_bindings_for_integration" => "get_console_organizations__orgId__integrations__intId__bindings", GetBindingsForIntegration;
    UPLOAD_AND_BIND_CERTIFICATE: "upload_and_bind_certificate" => "post_console_organizations__orgId__integrations__intId__bindings", UploadAndBindCertificate;
    DELETE_BINDING: "delete_binding" => "delete_console_organizations__orgId__integrations__intId__bindings__bindingId_", DeleteBinding;
    GET_INTEGRATION: "get_integration" => "get_console_organizations__orgId__integrations__intId_", GetIntegration;
    GET_INTEGRATION_SECRETS: "get_integration_secrets" => "get_console_organizations__orgId__integrations__intId__secrets", GetIntegrationSecrets;
    DELETE_INTEGRATION: "delete_integration" => "delete_console_organizations__orgId__integrations__intId_", DeleteIntegration;

    GET_ATLAS_APPLICATION_POLICY: "get_atlas_application_policy" => "get_console_organizations__orgId__policy__intId_", GetAtlasApplicationPolicy;
    GET_ATLAS_QUOTA_USAGE: "get_atlas_quota_usage" => "get_console_organizations__orgId__policy__intId__usage", GetAtlasQuotaUsage;

    VALIDATE_APPLICATION_NAME: "validate_application_name" => "get_console_organizations__orgId__apps__appName__validate", ValidateApplicationName;
    GET_APPLICATION_BY_ID: "get_application_by_id" => "get_console_organizations__orgId__apps__appId_", GetApplicationById;
    UPDATE_APPLICATION: "update_application" => "patch_console_organizations__orgId__apps__appId_", UpdateApplication;
    DELETE_APPLICATION: "delete_application" => "delete_console_organizations__orgId__apps__appId_", DeleteApplication;
    GET_APPLICATION_BY_NAME: "get_application_by_name" => "get_console_organizations__orgId__apps_searchName__appName_", GetApplicationByName;
    SUBMIT_APPLICATION: "submit_application" => "post_console_organizations__orgId__apps__appId__submit", SubmitApplication;
    GET_ALL_APPLICATIONS_FOR_USER: "get_all_applications_for_user" => "get_console_organizations__orgId__apps", GetAllApplicationsForUser;
    UPLOAD_APPLICATION_ICON: "upload_application_icon" => "post_console_organizations__orgId__apps__appId__upload", UploadApplicationIcon;
    GET_APP_REGISTRY_HEALTH: "get_app_registry_health" => "get_console_organizations__orgId__apps_health", GetAppRegistryHealth;

    GET_ALL_EXTENSION_POINTS: "get_all_extension_points" => "get_console_organizations__orgId__xp__xpId__extension_points", GetAllExtensionPoints;
    GET_APPLICATION_EXTENSIONS: "get_application_extensions" => "get_console_organizations__orgId__xp_apps__appId__extensions", GetApplicationExtensions;
    GET_ENDPOINTS: "get_endpoints" => "get_console_organizations__orgId__projects__projectId__workspaces__workspaceId__endpoints", GetEndpoints;
    UPDATE_ENDPOINTS: "update_endpoints" => "put_console_organizations__orgId__projects__projectId__workspaces__workspaceId__endpoints", UpdateEndpoints;

    GET_DEV_TERMS: "get_dev_terms" => "get_console_devterms", GetDevTerms;
    CHECK_ORG_DEV_TERMS: "check_org_dev_terms" => "get_console_organizations__orgId__devterms", CheckOrgDevTerms;
    ACCEPT_ORG_DEV_TERMS: "accept_org_dev_terms" => "post_console_organizations__orgId__devterms", AcceptOrgDevTerms;
}
