//! API base URL resolution.
//!
//! The admin UI is deployed in a handful of fixed topologies and picks the
//! API location from the host and port it was itself served from. This is
//! a heuristic, not a configuration mechanism: anything unrecognised falls
//! through to the production URL and there is no failure outcome.

/// API behind the dev proxy, or the UI served straight from the API port.
pub const DEV_PROXY_API_URL: &str = "http://localhost:8080/api";

/// Default local HTTPS port of the API.
pub const LOCAL_SECURE_API_URL: &str = "https://localhost:7238/api";

/// Hosted API used by every non-loopback deployment.
pub const PRODUCTION_API_URL: &str = "https://gerenciamento-de-cursos.onrender.com/api";

/// Header value sent with every request.
pub const CONTENT_TYPE_JSON: &str = "application/json";

const LOOPBACK_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "[::1]"];

/// `window.location.hostname` for IPv6 keeps the brackets, so `[::1]` is
/// matched literally.
pub fn is_loopback(host: &str) -> bool {
    LOOPBACK_HOSTS.contains(&host)
}

/// Resolve the API base URL from the UI's own host and port.
///
/// Ordered, first match wins:
/// 1. `localhost:3000` (dev server) → [`DEV_PROXY_API_URL`]
/// 2. loopback on `8080` → [`DEV_PROXY_API_URL`]
/// 3. loopback on any other port → [`LOCAL_SECURE_API_URL`]
/// 4. anything else → [`PRODUCTION_API_URL`]
pub fn resolve_api_base(host: &str, port: &str) -> &'static str {
    if host == "localhost" && port == "3000" {
        return DEV_PROXY_API_URL;
    }

    if is_loopback(host) {
        if port == "8080" {
            return DEV_PROXY_API_URL;
        }
        return LOCAL_SECURE_API_URL;
    }

    PRODUCTION_API_URL
}

/// Read-only API configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn from_location(host: &str, port: &str) -> Self {
        Self {
            base_url: resolve_api_base(host, port).to_string(),
        }
    }
}

/// Join a request path onto a base URL with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_server_port_goes_through_proxy() {
        assert_eq!(resolve_api_base("localhost", "3000"), "http://localhost:8080/api");
    }

    #[test]
    fn ui_served_from_api_port() {
        assert_eq!(resolve_api_base("localhost", "8080"), "http://localhost:8080/api");
        assert_eq!(resolve_api_base("127.0.0.1", "8080"), "http://localhost:8080/api");
        assert_eq!(resolve_api_base("[::1]", "8080"), "http://localhost:8080/api");
    }

    #[test]
    fn other_loopback_ports_use_local_https() {
        assert_eq!(resolve_api_base("localhost", "5173"), "https://localhost:7238/api");
        assert_eq!(resolve_api_base("localhost", ""), "https://localhost:7238/api");
        // Only `localhost` gets the dev proxy on 3000.
        assert_eq!(resolve_api_base("127.0.0.1", "3000"), "https://localhost:7238/api");
    }

    #[test]
    fn public_hosts_use_production() {
        assert_eq!(resolve_api_base("cursos.example.com", "443"), PRODUCTION_API_URL);
        assert_eq!(resolve_api_base("192.168.0.10", "8080"), PRODUCTION_API_URL);
        assert_eq!(resolve_api_base("", ""), PRODUCTION_API_URL);
    }

    #[test]
    fn url_joining_normalises_slashes() {
        let config = ApiConfig::from_location("localhost", "3000");
        assert_eq!(join_url(&config.base_url, "/cursos"), "http://localhost:8080/api/cursos");
        assert_eq!(join_url(&config.base_url, "alunos/3"), "http://localhost:8080/api/alunos/3");
        assert_eq!(join_url("https://x/api/", "/matriculas"), "https://x/api/matriculas");
    }
}
