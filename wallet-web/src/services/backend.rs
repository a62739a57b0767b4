//! Backend status probe

use gloo_net::http::Request;

use crate::utils::constants::STATUS_ENDPOINT;

/// Fetch the backend status once and log it. Failure only affects the log.
pub async fn log_backend_status() {
    match Request::get(STATUS_ENDPOINT).send().await {
        Ok(resp) if resp.ok() => match resp.json::<serde_json::Value>().await {
            Ok(status) => log::info!("Backend status: {}", status),
            Err(e) => log::error!("Backend check failed: invalid status payload: {:?}", e),
        },
        Ok(resp) => log::error!("Backend check failed: status {}", resp.status()),
        Err(e) => log::error!("Backend check failed: {:?}", e),
    }
}
