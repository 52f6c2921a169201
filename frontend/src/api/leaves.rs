use super::client::ApiClient;
use super::types::{ApiError, CreateLeaveRequest, LeaveRequestResponse};

impl ApiClient {
    pub async fn create_leave_request(
        &self,
        request: &CreateLeaveRequest,
    ) -> Result<LeaveRequestResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/leaves", base_url))
                    .json(request),
            )
            .await?;
        Self::map_json_response(response).await
    }

    pub async fn get_my_leave_requests(&self) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/leaves/me", base_url)))
            .await?;
        Self::map_json_response(response).await
    }
}
