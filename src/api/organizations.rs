use crate::client::ConsoleClient;
use crate::endpoints;
use crate::request::Parameters;
use crate::sdk_errors::ConsoleError;
use crate::transport::ApiResponse;

impl ConsoleClient {
    /// Lists the organizations the access token belongs to.
    pub async fn get_organizations(&self) -> Result<ApiResponse, ConsoleError> {
        self.invoke(&endpoints::GET_ORGANIZATIONS, Parameters::new(), None)
            .await
    }

    pub async fn create_ims_org(&self) -> Result<ApiResponse, ConsoleError> {
        self.invoke(&endpoints::CREATE_IMS_ORG, Parameters::new(), None)
            .await
    }

    /// Lists the services available to an organization.
    pub async fn get_services_for_org(
        &self,
        organization_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = Parameters::new().with("orgId", organization_id);
        self.invoke(&endpoints::GET_SERVICES_FOR_ORG, parameters, None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::endpoints;
    use crate::request::Parameters;
    use crate::testing::assert_operation;

    #[tokio::test]
    async fn organization_operations() {
        assert_operation(&endpoints::GET_ORGANIZATIONS, Parameters::new(), None, |client| async move {
            client.get_organizations().await
        })
        .await;

        assert_operation(&endpoints::CREATE_IMS_ORG, Parameters::new(), None, |client| async move {
            client.create_ims_org().await
        })
        .await;

        assert_operation(
            &endpoints::GET_SERVICES_FOR_ORG,
            Parameters::new().with("orgId", "organizationId"),
            None,
            |client| async move { client.get_services_for_org("organizationId").await },
        )
        .await;
    }
}
