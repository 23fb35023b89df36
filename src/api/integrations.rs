use serde::Serialize;

use crate::client::ConsoleClient;
use crate::endpoints;
use crate::request::{FilePart, MultipartPayload, Parameters, RequestBody};
use crate::sdk_errors::ConsoleError;
use crate::transport::ApiResponse;

impl ConsoleClient {
    /// Lists the organization-level integrations.
    pub async fn get_integrations_for_org(
        &self,
        organization_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = Parameters::new().with("orgId", organization_id);
        self.invoke(&endpoints::GET_INTEGRATIONS_FOR_ORG, parameters, None)
            .await
    }

    /// Creates a service-account integration from a public certificate.
    pub async fn create_enterprise_integration(
        &self,
        organization_id: &str,
        certificate: FilePart,
        name: &str,
        description: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = Parameters::new().with("orgId", organization_id);
        let payload = MultipartPayload::new("certificate", certificate)
            .field("name", name)
            .field("description", description);
        self.invoke(
            &endpoints::CREATE_ENTERPRISE_INTEGRATION,
            parameters,
            Some(RequestBody::Multipart(payload)),
        )
        .await
    }

    pub async fn create_adobe_id_integration<B>(
        &self,
        organization_id: &str,
        integration_details: &B,
    ) -> Result<ApiResponse, ConsoleError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let parameters = Parameters::new().with("orgId", organization_id);
        self.invoke_json(&endpoints::CREATE_ADOBE_ID_INTEGRATION, parameters, integration_details)
            .await
    }

    pub async fn update_adobe_id_integration<B>(
        &self,
        organization_id: &str,
        integration_id: &str,
        integration_details: &B,
    ) -> Result<ApiResponse, ConsoleError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let parameters = integration_parameters(organization_id, integration_id);
        self.invoke_json(&endpoints::UPDATE_ADOBE_ID_INTEGRATION, parameters, integration_details)
            .await
    }

    pub async fn subscribe_adobe_id_integration_to_services<B>(
        &self,
        organization_id: &str,
        integration_id: &str,
        service_info: &B,
    ) -> Result<ApiResponse, ConsoleError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let parameters = integration_parameters(organization_id, integration_id);
        self.invoke_json(
            &endpoints::SUBSCRIBE_ADOBE_ID_INTEGRATION_TO_SERVICES,
            parameters,
            service_info,
        )
        .await
    }

    pub async fn subscribe_enterprise_integration_to_services<B>(
        &self,
        organization_id: &str,
        integration_id: &str,
        service_info: &B,
    ) -> Result<ApiResponse, ConsoleError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let parameters = integration_parameters(organization_id, integration_id);
        self.invoke_json(
            &endpoints::SUBSCRIBE_ENTERPRISE_INTEGRATION_TO_SERVICES,
            parameters,
            service_info,
        )
        .await
    }

    /// Lists the certificate bindings of an integration.
    pub async fn get_bindings_for_integration(
        &self,
        organization_id: &str,
        integration_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = integration_parameters(organization_id, integration_id);
        self.invoke(&endpoints::GET_BINDINGS_FOR_INTEGRATION, parameters, None)
            .await
    }

    /// Uploads a public certificate and binds it to an integration.
    pub async fn upload_and_bind_certificate(
        &self,
        organization_id: &str,
        integration_id: &str,
        certificate: FilePart,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = integration_parameters(organization_id, integration_id);
        let payload = MultipartPayload::new("certificate", certificate);
        self.invoke(
            &endpoints::UPLOAD_AND_BIND_CERTIFICATE,
            parameters,
            Some(RequestBody::Multipart(payload)),
        )
        .await
    }

    pub async fn delete_binding(
        &self,
        organization_id: &str,
        integration_id: &str,
        binding_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters =
            integration_parameters(organization_id, integration_id).with("bindingId", binding_id);
        self.invoke(&endpoints::DELETE_BINDING, parameters, None).await
    }

    pub async fn get_integration(
        &self,
        organization_id: &str,
        integration_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = integration_parameters(organization_id, integration_id);
        self.invoke(&endpoints::GET_INTEGRATION, parameters, None).await
    }

    /// Fetches the client secrets of an integration.
    pub async fn get_integration_secrets(
        &self,
        organization_id: &str,
        integration_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = integration_parameters(organization_id, integration_id);
        self.invoke(&endpoints::GET_INTEGRATION_SECRETS, parameters, None)
            .await
    }

    pub async fn delete_integration(
        &self,
        organization_id: &str,
        integration_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = integration_parameters(organization_id, integration_id);
        self.invoke(&endpoints::DELETE_INTEGRATION, parameters, None).await
    }

    /// Reads the Atlas policy applied to an integration.
    pub async fn get_atlas_application_policy(
        &self,
        organization_id: &str,
        integration_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = integration_parameters(organization_id, integration_id);
        self.invoke(&endpoints::GET_ATLAS_APPLICATION_POLICY, parameters, None)
            .await
    }

    /// Reads the Atlas quota usage of an integration.
    pub async fn get_atlas_quota_usage(
        &self,
        organization_id: &str,
        integration_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = integration_parameters(organization_id, integration_id);
        self.invoke(&endpoints::GET_ATLAS_QUOTA_USAGE, parameters, None)
            .await
    }
}

fn integration_parameters(organization_id: &str, integration_id: &str) -> Parameters {
    Parameters::new()
        .with("orgId", organization_id)
        .with("intId", integration_id)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::integration_parameters;
    use crate::endpoints;
    use crate::models::IntegrationDetails;
    use crate::request::{FilePart, MultipartPayload, Parameters, RequestBody};
    use crate::testing::assert_operation;

    fn ids() -> Parameters {
        integration_parameters("organizationId", "integrationId")
    }

    #[tokio::test]
    async fn integration_creation_and_updates() {
        assert_operation(
            &endpoints::GET_INTEGRATIONS_FOR_ORG,
            Parameters::new().with("orgId", "organizationId"),
            None,
            |client| async move { client.get_integrations_for_org("organizationId").await },
        )
        .await;

        let payload = MultipartPayload::new("certificate", FilePart::new("cert.pem", "certificate"))
            .field("name", "name")
            .field("description", "description");
        assert_operation(
            &endpoints::CREATE_ENTERPRISE_INTEGRATION,
            Parameters::new().with("orgId", "organizationId"),
            Some(RequestBody::Multipart(payload)),
            |client| async move {
                client
                    .create_enterprise_integration(
                        "organizationId",
                        FilePart::new("cert.pem", "certificate"),
                        "name",
                        "description",
                    )
                    .await
            },
        )
        .await;

        let details = IntegrationDetails {
            name: "web".to_owned(),
            description: "web app".to_owned(),
            platform: Some("WebApp".to_owned()),
            ..IntegrationDetails::default()
        };
        assert_operation(
            &endpoints::CREATE_ADOBE_ID_INTEGRATION,
            Parameters::new().with("orgId", "organizationId"),
            Some(RequestBody::Json(json!({
                "name": "web",
                "description": "web app",
                "platform": "WebApp"
            }))),
            |client| {
                let details = details.clone();
                async move { client.create_adobe_id_integration("organizationId", &details).await }
            },
        )
        .await;

        let body = || Some(RequestBody::Json(json!({ "some": "body" })));
        assert_operation(&endpoints::UPDATE_ADOBE_ID_INTEGRATION, ids(), body(), |client| async move {
            client
                .update_adobe_id_integration("organizationId", "integrationId", &json!({ "some": "body" }))
                .await
        })
        .await;

        assert_operation(
            &endpoints::SUBSCRIBE_ADOBE_ID_INTEGRATION_TO_SERVICES,
            ids(),
            body(),
            |client| async move {
                client
                    .subscribe_adobe_id_integration_to_services(
                        "organizationId",
                        "integrationId",
                        &json!({ "some": "body" }),
                    )
                    .await
            },
        )
        .await;

        assert_operation(
            &endpoints::SUBSCRIBE_ENTERPRISE_INTEGRATION_TO_SERVICES,
            ids(),
            body(),
            |client| async move {
                client
                    .subscribe_enterprise_integration_to_services(
                        "organizationId",
                        "integrationId",
                        &json!({ "some": "body" }),
                    )
                    .await
            },
        )
        .await;
    }

    #[tokio::test]
    async fn bindings_and_integration_lookup() {
        assert_operation(&endpoints::GET_BINDINGS_FOR_INTEGRATION, ids(), None, |client| async move {
            client
                .get_bindings_for_integration("organizationId", "integrationId")
                .await
        })
        .await;

        assert_operation(
            &endpoints::UPLOAD_AND_BIND_CERTIFICATE,
            ids(),
            Some(RequestBody::Multipart(MultipartPayload::new(
                "certificate",
                FilePart::new("cert.pem", "certificate"),
            ))),
            |client| async move {
                client
                    .upload_and_bind_certificate(
                        "organizationId",
                        "integrationId",
                        FilePart::new("cert.pem", "certificate"),
                    )
                    .await
            },
        )
        .await;

        assert_operation(
            &endpoints::DELETE_BINDING,
            ids().with("bindingId", "bindingId"),
            None,
            |client| async move {
                client
                    .delete_binding("organizationId", "integrationId", "bindingId")
                    .await
            },
        )
        .await;

        assert_operation(&endpoints::GET_INTEGRATION, ids(), None, |client| async move {
            client.get_integration("organizationId", "integrationId").await
        })
        .await;

        assert_operation(&endpoints::GET_INTEGRATION_SECRETS, ids(), None, |client| async move {
            client.get_integration_secrets("organizationId", "integrationId").await
        })
        .await;

        assert_operation(&endpoints::DELETE_INTEGRATION, ids(), None, |client| async move {
            client.delete_integration("organizationId", "integrationId").await
        })
        .await;
    }

    #[tokio::test]
    async fn atlas_policy_operations() {
        assert_operation(&endpoints::GET_ATLAS_APPLICATION_POLICY, ids(), None, |client| async move {
            client
                .get_atlas_application_policy("organizationId", "integrationId")
                .await
        })
        .await;

        assert_operation(&endpoints::GET_ATLAS_QUOTA_USAGE, ids(), None, |client| async move {
            client.get_atlas_quota_usage("organizationId", "integrationId").await
        })
        .await;
    }
}
