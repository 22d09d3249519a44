use serde::de::DeserializeOwned;

use super::api_error::ApiError;

/// Successful REST response: status plus the decoded body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decode a 2xx body as a bare `T`.
    ///
    /// Envelopes such as `{ "data": T }` are not unwrapped; they fail with
    /// [`ApiError::Decode`]. An empty body is read as JSON `null`, so
    /// `Option<T>` targets accept `204 No Content`.
    pub fn decode(status: u16, raw_body: &str) -> Result<Self, ApiError> {
        let text = if raw_body.trim().is_empty() {
            "null"
        } else {
            raw_body
        };
        let data = serde_json::from_str::<T>(text)
            .map_err(|e| ApiError::Decode(format!("HTTP {}: {}", status, e)))?;
        Ok(Self { status, data })
    }

    /// Classify a raw HTTP exchange: non-2xx statuses become
    /// [`ApiError::Status`], 2xx bodies are decoded as a bare `T`.
    pub fn from_http(status: u16, raw_body: &str) -> Result<Self, ApiError> {
        if !is_success(status) {
            return Err(ApiError::from_response(status, raw_body));
        }
        Self::decode(status, raw_body)
    }
}

impl ApiResponse<()> {
    /// Accept any 2xx for a write whose payload is never read.
    ///
    /// Created/updated records, `{ "data": ... }` envelopes and plain
    /// confirmation text all count as success.
    pub fn acknowledge(status: u16, raw_body: &str) -> Result<Self, ApiError> {
        if !is_success(status) {
            return Err(ApiError::from_response(status, raw_body));
        }
        Ok(Self { status, data: () })
    }
}

impl<T> ApiResponse<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    #[test]
    fn bare_payload_decodes() {
        let resp = ApiResponse::<Vec<Item>>::decode(200, r#"[{"id":1},{"id":2}]"#).unwrap();
        assert_eq!(resp.status, 200);
        assert_eq!(resp.data, vec![Item { id: 1 }, Item { id: 2 }]);
    }

    #[test]
    fn wrapped_payload_is_rejected() {
        let err = ApiResponse::<Vec<Item>>::decode(200, r#"{"data":[{"id":1}]}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));

        let err = ApiResponse::<Item>::decode(201, r#"{"data":{"id":1}}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn empty_body_fits_optional_targets() {
        let resp = ApiResponse::<Option<Item>>::decode(204, "").unwrap();
        assert_eq!(resp.data, None);
    }

    #[test]
    fn empty_body_is_not_a_list() {
        assert!(ApiResponse::<Vec<Item>>::decode(200, "").is_err());
        let resp = ApiResponse::<Option<Vec<Item>>>::decode(200, "").unwrap();
        assert_eq!(resp.into_data().unwrap_or_default(), Vec::new());
    }

    #[test]
    fn from_http_splits_on_status() {
        let err = ApiResponse::<Vec<Item>>::from_http(404, "Curso não encontrado").unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.server_text(), Some("Curso não encontrado"));

        let resp = ApiResponse::<Item>::from_http(200, r#"{"id":7}"#).unwrap();
        assert_eq!(resp.data, Item { id: 7 });
    }

    #[test]
    fn acknowledged_writes_ignore_the_body_shape() {
        let wrapped = r#"{"data":{"id":1,"nome":"Rust","descricao":"Sistemas"}}"#;
        assert_eq!(ApiResponse::<()>::acknowledge(201, wrapped).unwrap().status, 201);
        assert!(ApiResponse::<()>::acknowledge(201, "Curso criado com sucesso").is_ok());
        assert!(ApiResponse::<()>::acknowledge(204, "").is_ok());
        assert!(ApiResponse::<()>::acknowledge(200, r#"{"id":1}"#).is_ok());
    }

    #[test]
    fn acknowledged_writes_still_surface_server_errors() {
        let err =
            ApiResponse::<()>::acknowledge(409, "Aluno já matriculado neste curso").unwrap_err();
        assert!(err.is_status(409));
        assert_eq!(err.server_message(), Some("Aluno já matriculado neste curso"));
    }
}
