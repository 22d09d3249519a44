use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of an aggregate as the REST API sees it.
///
/// The string form is what goes into URL paths and `<select>` option
/// values, so `from_string(as_string(id)) == id` must hold.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the ID for a path segment or form value
    fn as_string(&self) -> String;

    /// Parse an ID from a form value
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Parse a numeric server ID, tolerating surrounding whitespace.
pub(crate) fn parse_numeric_id(s: &str, kind: &str) -> Result<i64, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(format!("Empty {} id", kind));
    }
    trimmed
        .parse::<i64>()
        .map_err(|e| format!("Invalid {} id '{}': {}", kind, trimmed, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_padded_numbers() {
        assert_eq!(parse_numeric_id(" 42 ", "course"), Ok(42));
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert!(parse_numeric_id("", "course").is_err());
        assert!(parse_numeric_id("no-cursos", "course").is_err());
    }
}
