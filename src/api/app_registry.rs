use serde::Serialize;
use serde_json::json;

use super::{APP_REGISTRY_APP_TYPE, ICON_ASSET_TYPE};
use crate::client::ConsoleClient;
use crate::endpoints;
use crate::request::{FilePart, MultipartPayload, Parameters, RequestBody};
use crate::sdk_errors::ConsoleError;
use crate::transport::ApiResponse;

impl ConsoleClient {
    /// Checks that an application name is free in the organization.
    pub async fn validate_application_name(
        &self,
        organization_id: &str,
        application_name: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = Parameters::new()
            .with("orgId", organization_id)
            .with("appName", application_name)
            .with("appType", APP_REGISTRY_APP_TYPE);
        self.invoke(&endpoints::VALIDATE_APPLICATION_NAME, parameters, None)
            .await
    }

    pub async fn get_application_by_id(
        &self,
        organization_id: &str,
        application_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = application_parameters(organization_id, application_id)
            .with("appType", APP_REGISTRY_APP_TYPE);
        self.invoke(&endpoints::GET_APPLICATION_BY_ID, parameters, None)
            .await
    }

    pub async fn update_application<B>(
        &self,
        organization_id: &str,
        application_id: &str,
        application_details: &B,
    ) -> Result<ApiResponse, ConsoleError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let parameters = application_parameters(organization_id, application_id);
        self.invoke_json(&endpoints::UPDATE_APPLICATION, parameters, application_details)
            .await
    }

    pub async fn delete_application(
        &self,
        organization_id: &str,
        application_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = application_parameters(organization_id, application_id);
        self.invoke(&endpoints::DELETE_APPLICATION, parameters, None)
            .await
    }

    pub async fn get_application_by_name(
        &self,
        organization_id: &str,
        application_name: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = Parameters::new()
            .with("orgId", organization_id)
            .with("appName", application_name);
        self.invoke(&endpoints::GET_APPLICATION_BY_NAME, parameters, None)
            .await
    }

    /// Submits an application for review.
    pub async fn submit_application(
        &self,
        organization_id: &str,
        application_id: &str,
        submitter_notes: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = application_parameters(organization_id, application_id);
        let body = RequestBody::Json(json!({ "submitterNotes": submitter_notes }));
        self.invoke(&endpoints::SUBMIT_APPLICATION, parameters, Some(body))
            .await
    }

    /// Lists one page of the caller's applications.
    pub async fn get_all_applications_for_user(
        &self,
        organization_id: &str,
        offset: u32,
        page_size: u32,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = Parameters::new()
            .with("orgId", organization_id)
            .with("offset", offset)
            .with("pageSize", page_size)
            .with("appType", APP_REGISTRY_APP_TYPE);
        self.invoke(&endpoints::GET_ALL_APPLICATIONS_FOR_USER, parameters, None)
            .await
    }

    /// Uploads the icon of an application as the multipart `file` field.
    pub async fn upload_application_icon(
        &self,
        organization_id: &str,
        application_id: &str,
        icon: FilePart,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = application_parameters(organization_id, application_id)
            .with("appType", APP_REGISTRY_APP_TYPE)
            .with("assetType", ICON_ASSET_TYPE);
        let payload = MultipartPayload::new("file", icon);
        self.invoke(
            &endpoints::UPLOAD_APPLICATION_ICON,
            parameters,
            Some(RequestBody::Multipart(payload)),
        )
        .await
    }

    pub async fn get_app_registry_health(
        &self,
        organization_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = Parameters::new().with("orgId", organization_id);
        self.invoke(&endpoints::GET_APP_REGISTRY_HEALTH, parameters, None)
            .await
    }
}

fn application_parameters(organization_id: &str, application_id: &str) -> Parameters {
    Parameters::new()
        .with("orgId", organization_id)
        .with("appId", application_id)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::application_parameters;
    use crate::endpoints;
    use crate::request::{FilePart, MultipartPayload, Parameters, RequestBody};
    use crate::testing::assert_operation;

    fn ids() -> Parameters {
        application_parameters("organizationId", "applicationId")
    }

    #[tokio::test]
    async fn application_lookup_operations() {
        assert_operation(
            &endpoints::VALIDATE_APPLICATION_NAME,
            Parameters::new()
                .with("orgId", "organizationId")
                .with("appName", "applicationName")
                .with("appType", "JGR"),
            None,
            |client| async move {
                client
                    .validate_application_name("organizationId", "applicationName")
                    .await
            },
        )
        .await;

        assert_operation(
            &endpoints::GET_APPLICATION_BY_ID,
            ids().with("appType", "JGR"),
            None,
            |client| async move {
                client
                    .get_application_by_id("organizationId", "applicationId")
                    .await
            },
        )
        .await;

        assert_operation(
            &endpoints::GET_APPLICATION_BY_NAME,
            Parameters::new()
                .with("orgId", "organizationId")
                .with("appName", "applicationName"),
            None,
            |client| async move {
                client
                    .get_application_by_name("organizationId", "applicationName")
                    .await
            },
        )
        .await;

        assert_operation(
            &endpoints::GET_ALL_APPLICATIONS_FOR_USER,
            Parameters::new()
                .with("orgId", "organizationId")
                .with("offset", 0_u32)
                .with("pageSize", 50_u32)
                .with("appType", "JGR"),
            None,
            |client| async move {
                client
                    .get_all_applications_for_user("organizationId", 0, 50)
                    .await
            },
        )
        .await;

        assert_operation(
            &endpoints::GET_APP_REGISTRY_HEALTH,
            Parameters::new().with("orgId", "organizationId"),
            None,
            |client| async move { client.get_app_registry_health("organizationId").await },
        )
        .await;
    }

    #[tokio::test]
    async fn application_change_operations() {
        assert_operation(
            &endpoints::UPDATE_APPLICATION,
            ids(),
            Some(RequestBody::Json(json!({ "some": "body" }))),
            |client| async move {
                client
                    .update_application("organizationId", "applicationId", &json!({ "some": "body" }))
                    .await
            },
        )
        .await;

        assert_operation(&endpoints::DELETE_APPLICATION, ids(), None, |client| async move {
            client.delete_application("organizationId", "applicationId").await
        })
        .await;

        assert_operation(
            &endpoints::SUBMIT_APPLICATION,
            ids(),
            Some(RequestBody::Json(json!({ "submitterNotes": "submitterNotesfake" }))),
            |client| async move {
                client
                    .submit_application("organizationId", "applicationId", "submitterNotesfake")
                    .await
            },
        )
        .await;

        assert_operation(
            &endpoints::UPLOAD_APPLICATION_ICON,
            ids().with("appType", "JGR").with("assetType", "ICON"),
            Some(RequestBody::Multipart(MultipartPayload::new(
                "file",
                FilePart::new("icon.png", "fakeicon"),
            ))),
            |client| async move {
                client
                    .upload_application_icon(
                        "organizationId",
                        "applicationId",
                        FilePart::new("icon.png", "fakeicon"),
                    )
                    .await
            },
        )
        .await;
    }
}
