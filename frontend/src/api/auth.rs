use super::client::ApiClient;
use super::types::{ApiError, LoginRequest, LoginResponse, UserResponse};

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/auth/login", base_url))
                    .json(&request),
            )
            .await?;

        let login_response: LoginResponse = Self::map_json_response(response).await?;
        Self::persist_session(&login_response);
        Ok(login_response)
    }

    pub async fn get_profile(&self) -> Result<UserResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/auth/profile", base_url)))
            .await?;
        Self::map_json_response(response).await
    }

    /// Sessions are stateless on the server side; logout only discards the
    /// stored token and user.
    pub fn logout(&self) {
        Self::clear_session();
    }
}
