use serde::Serialize;

use crate::client::ConsoleClient;
use crate::endpoints;
use crate::request::Parameters;
use crate::sdk_errors::ConsoleError;
use crate::transport::ApiResponse;

impl ConsoleClient {
    /// Creates a workspace; `workspace_details` is usually a
    /// [`crate::models::WorkspaceDetails`].
    pub async fn create_workspace<B>(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_details: &B,
    ) -> Result<ApiResponse, ConsoleError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let parameters = Parameters::new()
            .with("orgId", organization_id)
            .with("projectId", project_id);
        self.invoke_json(&endpoints::CREATE_WORKSPACE, parameters, workspace_details)
            .await
    }

    pub async fn get_workspace(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = workspace_parameters(organization_id, project_id, workspace_id);
        self.invoke(&endpoints::GET_WORKSPACE, parameters, None).await
    }

    pub async fn edit_workspace<B>(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
        workspace_details: &B,
    ) -> Result<ApiResponse, ConsoleError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let parameters = workspace_parameters(organization_id, project_id, workspace_id);
        self.invoke_json(&endpoints::EDIT_WORKSPACE, parameters, workspace_details)
            .await
    }

    pub async fn delete_workspace(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = workspace_parameters(organization_id, project_id, workspace_id);
        self.invoke(&endpoints::DELETE_WORKSPACE, parameters, None).await
    }

    /// Downloads the workspace configuration consumed by the App Builder tooling.
    pub async fn download_workspace_json(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = workspace_parameters(organization_id, project_id, workspace_id);
        self.invoke(&endpoints::DOWNLOAD_WORKSPACE_JSON, parameters, None)
            .await
    }

    /// Looks up the project owning a workspace.
    pub async fn get_project_for_workspace(
        &self,
        organization_id: &str,
        workspace_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = Parameters::new()
            .with("orgId", organization_id)
            .with("workspaceId", workspace_id);
        self.invoke(&endpoints::GET_PROJECT_FOR_WORKSPACE, parameters, None)
            .await
    }

    pub async fn get_plugins_for_workspace(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = workspace_parameters(organization_id, project_id, workspace_id);
        self.invoke(&endpoints::GET_PLUGINS_FOR_WORKSPACE, parameters, None)
            .await
    }

    /// Provisions the I/O Runtime namespace of a workspace.
    pub async fn create_runtime_namespace(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = workspace_parameters(organization_id, project_id, workspace_id);
        self.invoke(&endpoints::CREATE_RUNTIME_NAMESPACE, parameters, None)
            .await
    }

    /// Lists the extension endpoints registered on a workspace.
    pub async fn get_endpoints(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = workspace_parameters(organization_id, project_id, workspace_id);
        self.invoke(&endpoints::GET_ENDPOINTS, parameters, None).await
    }

    pub async fn update_endpoints<B>(
        &self,
        organization_id: &str,
        project_id: &str,
        workspace_id: &str,
        endpoints_details: &B,
    ) -> Result<ApiResponse, ConsoleError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let parameters = workspace_parameters(organization_id, project_id, workspace_id);
        self.invoke_json(&endpoints::UPDATE_ENDPOINTS, parameters, endpoints_details)
            .await
    }
}

pub(super) fn workspace_parameters(
    organization_id: &str,
    project_id: &str,
    workspace_id: &str,
) -> Parameters {
    Parameters::new()
        .with("orgId", organization_id)
        .with("projectId", project_id)
        .with("workspaceId", workspace_id)
}
