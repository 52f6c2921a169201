use super::client::ApiClient;
use super::types::{ApiError, ApproverResponse, ApproversResponse};

impl ApiClient {
    /// The approvers assigned to the current user by the org hierarchy,
    /// tagged with the workflow level each one signs off at.
    pub async fn get_my_approvers(&self) -> Result<Vec<ApproverResponse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/users/me/approvers", base_url)),
            )
            .await?;
        let parsed: ApproversResponse = Self::map_json_response(response).await?;
        Ok(parsed.approvers)
    }
}
