//! Shared REST client.
//!
//! One instance per page load, bound to the resolved base URL and sending
//! `Content-Type: application/json` on every request. No retries, no
//! timeouts, no cancellation: callers decide what a failure means.

use contracts::shared::{ApiError, ApiRequest, ApiResponse, HttpMethod, CONTENT_TYPE_JSON};
use gloo_net::http::{Request, RequestBuilder};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;

use super::api_utils::api_base;

static CLIENT: OnceCell<ApiClient> = OnceCell::new();

/// The shared client. The first call resolves the base URL.
pub fn api() -> &'static ApiClient {
    CLIENT.get_or_init(|| ApiClient::new(api_base()))
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute a request descriptor and decode a bare `T` from a 2xx body.
    pub async fn send<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> Result<ApiResponse<T>, ApiError> {
        let (status, raw) = self.exchange(request).await?;
        ApiResponse::from_http(status, &raw).inspect_err(|e| self.log_failure(request, e))
    }

    /// Execute a write whose response payload is not used.
    ///
    /// Any 2xx counts as success whatever the body looks like.
    pub async fn acknowledge(&self, request: &ApiRequest) -> Result<(), ApiError> {
        let (status, raw) = self.exchange(request).await?;
        ApiResponse::<()>::acknowledge(status, &raw)
            .map(|_| ())
            .inspect_err(|e| self.log_failure(request, e))
    }

    /// Send the request and read the raw body, whatever the status.
    async fn exchange(&self, request: &ApiRequest) -> Result<(u16, String), ApiError> {
        let url = request.url(&self.base_url);
        log::debug!("{} {}", request.method, url);

        let builder = Self::builder(request.method, &url).header("Content-Type", CONTENT_TYPE_JSON);
        let sent = match request.body_text() {
            Some(body) => builder
                .body(body)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        };

        let response = sent.map_err(|e| {
            log::error!("{} {} got no response: {}", request.method, url, e);
            ApiError::NoResponse(e.to_string())
        })?;

        let status = response.status();
        let raw = response.text().await.map_err(|e| {
            log::error!("{} {} body unreadable: {}", request.method, url, e);
            ApiError::unreadable_body(status, e)
        })?;

        Ok((status, raw))
    }

    fn log_failure(&self, request: &ApiRequest, err: &ApiError) {
        let url = request.url(&self.base_url);
        match err {
            ApiError::Status { .. } => log::warn!("{} {} failed: {}", request.method, url, err),
            _ => log::error!("{} {}: {}", request.method, url, err),
        }
    }

    fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
        match method {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
            HttpMethod::Put => Request::put(url),
            HttpMethod::Delete => Request::delete(url),
        }
    }
}
