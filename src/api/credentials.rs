use serde::Serialize;

use super::workspaces::workspace_parameters;
use crate::client::ConsoleClient;
use crate::endpoints;
use crate::request::{FilePart, MultipartPayload, Parameters, RequestBody};
use crate::sdk_errors::ConsoleError;
use crate::transport::ApiResponse;

impl ConsoleClient {
    pub async fn get_credentials(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = workspace_parameters(organization_id, project_id, workspace_id);
        self.invoke(&endpoints::GET_CREDENTIALS, parameters, None).await
    }

    /// Creates a service-account (JWT) credential from a public certificate.
    ///
    /// Sent as a multipart form with the `certificate` file and the `name` and
    /// `description` fields.
    pub async fn create_enterprise_credential(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
        certificate: FilePart,
        name: &str,
        description: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = workspace_parameters(organization_id, project_id, workspace_id);
        let payload = MultipartPayload::new("certificate", certificate)
            .field("name", name)
            .field("description", description);
        self.invoke(
            &endpoints::CREATE_ENTERPRISE_CREDENTIAL,
            parameters,
            Some(RequestBody::Multipart(payload)),
        )
        .await
    }

    /// Creates an OAuth credential; `credential_details` is usually a
    /// [`crate::models::IntegrationDetails`].
    pub async fn create_adobe_id_credential<B>(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
        credential_details: &B,
    ) -> Result<ApiResponse, ConsoleError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let parameters = workspace_parameters(organization_id, project_id, workspace_id);
        self.invoke_json(&endpoints::CREATE_ADOBE_ID_CREDENTIAL, parameters, credential_details)
            .await
    }

    pub async fn create_analytics_credential<B>(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
        credential_details: &B,
    ) -> Result<ApiResponse, ConsoleError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let parameters = workspace_parameters(organization_id, project_id, workspace_id);
        self.invoke_json(&endpoints::CREATE_ANALYTICS_CREDENTIAL, parameters, credential_details)
            .await
    }

    /// Subscribes a credential to services.
    ///
    /// `credential_type` is `entp` or `adobeid`.
    pub async fn subscribe_credential_to_services<B>(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
        credential_type: &str,
        credential_id: &str,
        service_info: &B,
    ) -> Result<ApiResponse, ConsoleError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let parameters = workspace_parameters(organization_id, project_id, workspace_id)
            .with("credentialType", credential_type)
            .with("credentialId", credential_id);
        self.invoke_json(&endpoints::SUBSCRIBE_CREDENTIAL_TO_SERVICES, parameters, service_info)
            .await
    }

    /// Deletes a credential.
    ///
    /// The endpoint does not take the credential type; it is only recorded in
    /// the error details.
    pub async fn delete_credential(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
        credential_type: &str,
        credential_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = workspace_parameters(organization_id, project_id, workspace_id)
            .with("credentialType", credential_type)
            .with("credentialId", credential_id);
        self.invoke(&endpoints::DELETE_CREDENTIAL, parameters, None).await
    }

    /// Looks up the project and workspace a credential lives in.
    pub async fn get_workspace_for_credential(
        &self,
        organization_id: &str,
        credential_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = Parameters::new()
            .with("orgId", organization_id)
            .with("credentialId", credential_id);
        self.invoke(&endpoints::GET_WORKSPACE_FOR_CREDENTIAL, parameters, None)
            .await
    }
}
