use crate::api::{ApiClient, ApiError, HealthResponse, TOKEN_KEY};
use crate::utils::storage as storage_utils;

/// Structured result of probing the API server, for console diagnostics
/// when a deployment cannot reach its backend.
#[derive(Debug, Clone)]
pub struct ConnectionReport {
    pub base_url: String,
    pub base_url_valid: bool,
    pub has_token: bool,
    pub health: Result<HealthResponse, ApiError>,
}

impl ConnectionReport {
    pub fn is_connected(&self) -> bool {
        self.health.is_ok()
    }

    pub fn summary(&self) -> String {
        match &self.health {
            Ok(health) => format!("Connected to {} (status: {})", self.base_url, health.status),
            Err(err) => format!("Cannot reach {}: {}", self.base_url, err),
        }
    }
}

pub async fn check_server_connection(client: &ApiClient) -> ConnectionReport {
    let base_url = client.resolved_base_url().await;
    let base_url_valid = reqwest::Url::parse(&base_url).is_ok();
    let has_token = storage_utils::local_storage()
        .ok()
        .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
        .is_some();

    log::info!("Testing connection to {}", base_url);
    let health = client.health_check().await;
    match &health {
        Ok(health) => log::info!("Server reachable, status: {}", health.status),
        Err(err) => log::error!("Server connection failed: {}", err),
    }

    ConnectionReport {
        base_url,
        base_url_valid,
        has_token,
        health,
    }
}

/// Callable from the browser console as `wasm_bindgen` export
/// `debug_connection()` to diagnose a broken deployment in place.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn debug_connection() {
    wasm_bindgen_futures::spawn_local(async {
        let client = ApiClient::new();
        let report = check_server_connection(&client).await;
        web_sys::console::log_1(&report.summary().into());
        web_sys::console::log_1(
            &format!(
                "base_url_valid: {}, token present: {}",
                report.base_url_valid, report.has_token
            )
            .into(),
        );
    });
}
