use super::client::ApiClient;
use super::types::{ApiError, ApprovalWorkflowResponse};

impl ApiClient {
    /// Looks up the single active workflow whose day range contains
    /// `days`. Range overlap is resolved server-side; the client renders
    /// whatever one workflow comes back.
    pub async fn get_workflow_for_duration(
        &self,
        days: i64,
    ) -> Result<ApprovalWorkflowResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/approval-workflows/for-duration", base_url))
                    .query(&[("days", days)]),
            )
            .await?;
        Self::map_json_response(response).await
    }
}
