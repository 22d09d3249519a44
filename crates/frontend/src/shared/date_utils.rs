/// Utilities for date formatting
///
/// Dates arrive from the server as ISO strings, sometimes with a time part.
use chrono::{NaiveDate, Utc};

/// Current calendar date in UTC
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Today as `YYYY-MM-DD`, the form used by `<input type="date" max=...>`
pub fn today_iso() -> String {
    today().format("%Y-%m-%d").to_string()
}

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn today_iso_is_parseable() {
        let iso = today_iso();
        assert_eq!(NaiveDate::parse_from_str(&iso, "%Y-%m-%d"), Ok(today()));
    }
}
