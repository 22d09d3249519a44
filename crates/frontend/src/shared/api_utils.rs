//! API utilities for frontend-backend communication
//!
//! The base URL is derived from `window.location` the first time it is
//! needed and never changes afterwards.

use contracts::shared::ApiConfig;
use once_cell::sync::OnceCell;

static API_CONFIG: OnceCell<ApiConfig> = OnceCell::new();

/// Resolved API configuration for this page load
pub fn api_config() -> &'static ApiConfig {
    API_CONFIG.get_or_init(|| {
        let (hostname, port) = current_location();
        let config = ApiConfig::from_location(&hostname, &port);
        log::info!(
            "API base URL for {}:{} -> {}",
            hostname,
            port,
            config.base_url
        );
        config
    })
}

/// Get the base URL for API requests
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/cursos", api_base());
/// ```
pub fn api_base() -> &'static str {
    &api_config().base_url
}

fn current_location() -> (String, String) {
    let Some(window) = web_sys::window() else {
        return (String::new(), String::new());
    };
    let location = window.location();
    let hostname = location.hostname().unwrap_or_default();
    let port = location.port().unwrap_or_default();
    (hostname, port)
}
