use serde::Serialize;

use crate::client::ConsoleClient;
use crate::endpoints;
use crate::models::FIREFLY_PROJECT_TYPE;
use crate::request::Parameters;
use crate::sdk_errors::ConsoleError;
use crate::transport::ApiResponse;

/// Project details with the type forced to [`FIREFLY_PROJECT_TYPE`].
///
/// The forced `type` is written after the flattened details, so it replaces any
/// `type` they carry once the body is turned into a JSON object.
#[derive(Serialize)]
struct FireflyProject<'a, B: ?Sized> {
    #[serde(flatten)]
    details: &'a B,
    #[serde(rename = "type")]
    project_type: &'static str,
}

impl ConsoleClient {
    pub async fn get_projects_for_org(
        &self,
        organization_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = Parameters::new().with("orgId", organization_id);
        self.invoke(&endpoints::GET_PROJECTS_FOR_ORG, parameters, None)
            .await
    }

    /// Creates a project; `project_details` is usually a
    /// [`crate::models::ProjectDetails`].
    pub async fn create_project<B>(
        &self,
        organization_id: &str,
        project_details: &B,
    ) -> Result<ApiResponse, ConsoleError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let parameters = Parameters::new().with("orgId", organization_id);
        self.invoke_json(&endpoints::CREATE_PROJECT, parameters, project_details)
            .await
    }

    /// Creates a Firefly (App Builder) project.
    ///
    /// Same call as [`Self::create_project`], with the project type set to
    /// `jaeger` whatever `project_details` says.
    pub async fn create_firefly_project<B>(
        &self,
        organization_id: &str,
        project_details: &B,
    ) -> Result<ApiResponse, ConsoleError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let details = FireflyProject {
            details: project_details,
            project_type: FIREFLY_PROJECT_TYPE,
        };
        self.create_project(organization_id, &details).await
    }

    pub async fn get_project(
        &self,
        organization_id: &str,
        project_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        self.invoke(&endpoints::GET_PROJECT, project_parameters(organization_id, project_id), None)
            .await
    }

    pub async fn edit_project<B>(
        &self,
        organization_id: &str,
        project_id: &str,
        project_details: &B,
    ) -> Result<ApiResponse, ConsoleError>
    where
        B: Serialize + Sync + ?Sized,
    {
        self.invoke_json(
            &endpoints::EDIT_PROJECT,
            project_parameters(organization_id, project_id),
            project_details,
        )
        .await
    }

    pub async fn delete_project(
        &self,
        organization_id: &str,
        project_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        self.invoke(
            &endpoints::DELETE_PROJECT,
            project_parameters(organization_id, project_id),
            None,
        )
        .await
    }

    pub async fn get_workspaces_for_project(
        &self,
        organization_id: &str,
        project_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        self.invoke(
            &endpoints::GET_WORKSPACES_FOR_PROJECT,
            project_parameters(organization_id, project_id),
            None,
        )
        .await
    }
}

fn project_parameters(organization_id: &str, project_id: &str) -> Parameters {
    Parameters::new()
        .with("orgId", organization_id)
        .with("projectId", project_id)
}
