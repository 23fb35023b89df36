use crate::client::ConsoleClient;
use crate::endpoints;
use crate::request::Parameters;
use crate::sdk_errors::ConsoleError;
use crate::transport::ApiResponse;

impl ConsoleClient {
    /// Lists the extension points of one App Builder extension platform.
    ///
    /// `extension_point_id` is for instance `firefly` or `dx-excshell-1`.
    pub async fn get_all_extension_points(
        &self,
        organization_id: &str,
        extension_point_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = Parameters::new()
            .with("orgId", organization_id)
            .with("xpId", extension_point_id);
        self.invoke(&endpoints::GET_ALL_EXTENSION_POINTS, parameters, None)
            .await
    }

    pub async fn get_application_extensions(
        &self,
        organization_id: &str,
        application_id: &str,
    ) -> Result<ApiResponse, ConsoleError> {
        let parameters = Parameters::new()
            .with("orgId", organization_id)
            .with("appId", application_id);
        self.invoke(&endpoints::GET_APPLICATION_EXTENSIONS, parameters, None)
            .await
    }
}
