use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::types::{ApiError, HealthResponse, LoginResponse};
use crate::config;
use crate::utils::storage as storage_utils;

pub const TOKEN_KEY: &str = "token";
pub const CURRENT_USER_KEY: &str = "current_user";

#[derive(Clone, Default)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bypasses runtime config resolution. Used by tests and diagnostics.
    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &reqwest::Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None => config::await_api_base_url().await,
        }
    }

    fn stored_token() -> Option<String> {
        storage_utils::local_storage()
            .ok()
            .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }

    /// Bearer header when a token is stored; empty map otherwise. Storage is
    /// unavailable outside the browser, so native builds simply send no
    /// Authorization header.
    pub(crate) fn auth_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = Self::stored_token() {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                headers.insert(AUTHORIZATION, value);
            }
        }
        headers
    }

    pub(crate) fn clear_session() {
        if let Ok(storage) = storage_utils::local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(CURRENT_USER_KEY);
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn redirect_to_login_if_needed() {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        if let Ok(path) = location.pathname() {
            if path != "/login" {
                let _ = location.set_href("/login");
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn redirect_to_login_if_needed() {}

    /// Expired or revoked sessions drop straight back to the login page.
    pub(crate) fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            Self::clear_session();
            Self::redirect_to_login_if_needed();
        }
    }

    pub(crate) async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        request
            .headers(Self::auth_headers())
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    pub(crate) async fn map_json_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(response
                .json::<ApiError>()
                .await
                .unwrap_or_else(|e| Self::map_error_payload_parse_failure(status, e)))
        }
    }

    pub(crate) fn map_error_payload_parse_failure(
        status: StatusCode,
        err: reqwest::Error,
    ) -> ApiError {
        ApiError::unknown(format!(
            "Server returned {} with an unreadable body: {}",
            status, err
        ))
    }

    /// Best effort: a missing localStorage (native tests) is not a login
    /// failure.
    pub(crate) fn persist_session(response: &LoginResponse) {
        let Ok(storage) = storage_utils::local_storage() else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, &response.token);
        if let Ok(user_json) = serde_json::to_string(&response.user) {
            let _ = storage.set_item(CURRENT_USER_KEY, &user_json);
        }
    }

    pub fn stored_user() -> Option<super::types::UserResponse> {
        let storage = storage_utils::local_storage().ok()?;
        let raw = storage.get_item(CURRENT_USER_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    pub async fn health_check(&self) -> Result<HealthResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/health", base_url)))
            .await?;
        Self::map_json_response(response).await
    }
}
