use crate::api::{ApiClient, ApiError, LoginRequest, LoginResponse, UserResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        self.client.login(request).await
    }

    pub async fn fetch_profile(&self) -> Result<UserResponse, ApiError> {
        self.client.get_profile().await
    }

    pub fn logout(&self) {
        self.client.logout();
    }
}
