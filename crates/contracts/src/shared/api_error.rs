use serde_json::Value;
use thiserror::Error;

/// Payload of a non-2xx response.
///
/// The server answers validation failures either with a bare string
/// ("Aluno deve ser maior de idade...") or with a JSON object, so both are
/// kept as received.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    Empty,
    Text(String),
    Structured(Value),
}

impl ErrorBody {
    /// Classify a raw response body.
    ///
    /// JSON-quoted strings are unquoted; objects and arrays stay structured;
    /// anything that is not JSON (or is a JSON scalar) is kept as raw text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return ErrorBody::Empty;
        }

        match serde_json::from_str::<Value>(trimmed) {
            Ok(Value::String(s)) => ErrorBody::Text(s),
            Ok(v @ (Value::Object(_) | Value::Array(_))) => ErrorBody::Structured(v),
            _ => ErrorBody::Text(trimmed.to_string()),
        }
    }

    /// Plain-text message, if the body is one
    pub fn text(&self) -> Option<&str> {
        match self {
            ErrorBody::Text(s) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Human-readable message: the text body, or the `message` / `detail`
    /// field of a structured body.
    pub fn message(&self) -> Option<&str> {
        match self {
            ErrorBody::Structured(Value::Object(map)) => ["message", "detail"]
                .iter()
                .filter_map(|key| map.get(*key).and_then(Value::as_str))
                .find(|s| !s.trim().is_empty()),
            _ => self.text(),
        }
    }
}

impl std::fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorBody::Empty => write!(f, "<empty>"),
            ErrorBody::Text(s) => write!(f, "{}", s),
            ErrorBody::Structured(v) => write!(f, "{}", v),
        }
    }
}

/// Failure of a REST call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: ErrorBody },

    /// The request never got a response (network down, CORS, DNS...)
    #[error("no response from server: {0}")]
    NoResponse(String),

    /// A 2xx body did not have the expected shape
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The request body could not be serialized
    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn from_response(status: u16, raw_body: &str) -> Self {
        ApiError::Status {
            status,
            body: ErrorBody::parse(raw_body),
        }
    }

    /// A response arrived but its body could not be read
    pub fn unreadable_body(status: u16, reason: impl std::fmt::Display) -> Self {
        ApiError::Decode(format!("HTTP {}: unreadable body: {}", status, reason))
    }

    /// HTTP status, when a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_status(&self, expected: u16) -> bool {
        self.status() == Some(expected)
    }

    pub fn is_no_response(&self) -> bool {
        matches!(self, ApiError::NoResponse(_))
    }

    /// Server-provided plain-text error, shown verbatim to the user
    pub fn server_text(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } => body.text(),
            _ => None,
        }
    }

    /// Server-provided message from either a text or a structured body
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } => body.message(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_text_body() {
        let err = ApiError::from_response(400, "Aluno deve ser maior de idade.");
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.server_text(), Some("Aluno deve ser maior de idade."));
    }

    #[test]
    fn json_quoted_string_is_unquoted() {
        let err = ApiError::from_response(409, r#""Aluno já matriculado neste curso.""#);
        assert_eq!(err.server_text(), Some("Aluno já matriculado neste curso."));
    }

    #[test]
    fn object_body_is_structured() {
        let raw = r#"{"title":"One or more validation errors occurred.","status":400}"#;
        let err = ApiError::from_response(400, raw);
        match &err {
            ApiError::Status { body: ErrorBody::Structured(v), .. } => {
                assert_eq!(v["status"], json!(400));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(err.server_text(), None);
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn structured_message_field_is_exposed() {
        let err = ApiError::from_response(404, r#"{"message":"Matrícula não encontrada"}"#);
        assert_eq!(err.server_text(), None);
        assert_eq!(err.server_message(), Some("Matrícula não encontrada"));
    }

    #[test]
    fn empty_and_blank_bodies() {
        assert_eq!(ErrorBody::parse(""), ErrorBody::Empty);
        assert_eq!(ErrorBody::parse("  \n"), ErrorBody::Empty);
        assert_eq!(ApiError::from_response(500, "").server_text(), None);
        assert_eq!(ErrorBody::parse(r#""  ""#).text(), None);
    }

    #[test]
    fn transport_failure_has_no_status() {
        let err = ApiError::NoResponse("TypeError: Failed to fetch".into());
        assert!(err.is_no_response());
        assert_eq!(err.status(), None);
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn unreadable_body_is_not_a_missing_response() {
        let err = ApiError::unreadable_body(200, "stream closed");
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(!err.is_no_response());
        assert_eq!(err.status(), None);
    }
}
