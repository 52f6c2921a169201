use crate::api::{
    ApiClient, ApiError, ApprovalWorkflowResponse, ApproverResponse, CreateLeaveRequest,
    LeaveRequestResponse,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeavesRepository {
    client: Rc<ApiClient>,
}

impl LeavesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn submit_leave(
        &self,
        payload: CreateLeaveRequest,
    ) -> Result<LeaveRequestResponse, ApiError> {
        self.client.create_leave_request(&payload).await
    }

    pub async fn list_my_leaves(&self) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        self.client.get_my_leave_requests().await
    }

    pub async fn fetch_workflow_for_duration(
        &self,
        days: i64,
    ) -> Result<ApprovalWorkflowResponse, ApiError> {
        self.client.get_workflow_for_duration(days).await
    }

    pub async fn fetch_my_approvers(&self) -> Result<Vec<ApproverResponse>, ApiError> {
        self.client.get_my_approvers().await
    }
}
