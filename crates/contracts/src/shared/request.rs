use serde::Serialize;
use serde_json::Value;

use super::api_config::join_url;
use super::api_error::ApiError;

/// HTTP verbs used by the admin UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Description of a single REST call, relative to the API base URL.
///
/// Endpoint modules build these; the HTTP client only executes them.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Delete,
            path: path.into(),
            body: None,
        }
    }

    pub fn post<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        Self::with_body(HttpMethod::Post, path.into(), body)
    }

    pub fn put<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        Self::with_body(HttpMethod::Put, path.into(), body)
    }

    fn with_body<B: Serialize>(
        method: HttpMethod,
        path: String,
        body: &B,
    ) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self {
            method,
            path,
            body: Some(body),
        })
    }

    /// Absolute URL of the request against `base_url`
    pub fn url(&self, base_url: &str) -> String {
        join_url(base_url, &self.path)
    }

    /// Serialized JSON body, if any
    pub fn body_text(&self) -> Option<String> {
        self.body.as_ref().map(Value::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Payload {
        #[serde(rename = "nome")]
        name: &'static str,
    }

    #[test]
    fn post_carries_serialized_body() {
        let req = ApiRequest::post("/cursos", &Payload { name: "Rust" }).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.body, Some(json!({ "nome": "Rust" })));
        assert_eq!(req.body_text().as_deref(), Some(r#"{"nome":"Rust"}"#));
    }

    #[test]
    fn get_and_delete_have_no_body() {
        assert_eq!(ApiRequest::get("/alunos").body, None);
        assert_eq!(ApiRequest::delete("/alunos/1").method.as_str(), "DELETE");
    }

    #[test]
    fn url_is_resolved_against_base() {
        let req = ApiRequest::get("/matriculas");
        assert_eq!(
            req.url("https://localhost:7238/api"),
            "https://localhost:7238/api/matriculas"
        );
    }
}
