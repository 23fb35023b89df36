use crate::client::ConsoleClient;
use crate::endpoints;
use crate::request::Parameters;
use crate::sdk_errors::ConsoleError;
use crate::transport::ApiResponse;

impl ConsoleClient {
    /// Fetches the current developer terms.
    pub async fn get_dev_terms(&self) -> Result<ApiResponse, ConsoleError> {
        self.invoke(&endpoints::GET_DEV_TERMS, Parameters::new(), None)
            .await
    }

    /// Checks whether the organization accepted the developer terms.
    pub async fn check_org_dev_terms(
        &self,
        organization_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = Parameters::new().with("orgId", organization_id);
        self.invoke(&endpoints::CHECK_ORG_DEV_TERMS, parameters, None)
            .await
    }

    pub async fn accept_org_dev_terms(
        &self,
        organization_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = Parameters::new().with("orgId", organization_id);
        self.invoke(&endpoints::ACCEPT_ORG_DEV_TERMS, parameters, None)
            .await
    }
}
