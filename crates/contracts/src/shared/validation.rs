//! Client-side form validation.
//!
//! Only the checks the UI can decide on its own live here (required
//! fields, email shape, birth date not in the future). Age and enrollment
//! uniqueness are the server's call.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} é obrigatório")]
    Required { field: &'static str },

    #[error("Email inválido")]
    InvalidEmail,

    #[error("Data inválida: {0}")]
    InvalidDate(String),

    #[error("A data de nascimento não pode ser posterior a hoje")]
    BirthDateInFuture,

    #[error("Selecione um {field} válido")]
    InvalidSelection { field: &'static str },
}

/// Trim `value` and fail if nothing is left.
pub fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(trimmed)
}

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let clean = |s: &str| !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '@');
    if !clean(local) || !clean(domain) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Parse `YYYY-MM-DD`, also accepting a full timestamp (`1995-01-15T00:00:00`)
/// as returned by the server.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = value.trim();
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}

/// Birth dates up to and including `today` are accepted.
pub fn check_birth_date(birth: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if birth > today {
        return Err(ValidationError::BirthDateInFuture);
    }
    Ok(())
}

/// Completed years between `birth` and `today` (0 for future dates).
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> u32 {
    if birth > today {
        return 0;
    }
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn require_trims() {
        assert_eq!(require("Nome", "  Ana  "), Ok("Ana"));
        assert_eq!(
            require("Nome", "   "),
            Err(ValidationError::Required { field: "Nome" })
        );
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("test@email.com"));
        assert!(is_valid_email("a.b@sub.domain.org"));
        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@com."));
        assert!(!is_valid_email("a b@x.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("@x.com"));
    }

    #[test]
    fn iso_dates_with_and_without_time() {
        assert_eq!(parse_iso_date("1995-01-15"), Ok(date(1995, 1, 15)));
        assert_eq!(parse_iso_date("1995-01-15T00:00:00.000Z"), Ok(date(1995, 1, 15)));
        assert!(matches!(parse_iso_date("15/01/1995"), Err(ValidationError::InvalidDate(_))));
        assert!(parse_iso_date("").is_err());
    }

    #[test]
    fn birth_date_upper_bound_is_today() {
        let today = date(2024, 6, 10);
        assert!(check_birth_date(date(2024, 6, 10), today).is_ok());
        assert!(check_birth_date(date(1990, 5, 20), today).is_ok());
        assert_eq!(
            check_birth_date(date(2024, 6, 11), today),
            Err(ValidationError::BirthDateInFuture)
        );
    }

    #[test]
    fn age_counts_completed_years() {
        let today = date(2024, 6, 10);
        assert_eq!(age_on(date(1995, 1, 15), today), 29);
        assert_eq!(age_on(date(2006, 6, 10), today), 18);
        assert_eq!(age_on(date(2006, 6, 11), today), 17);
        assert_eq!(age_on(date(2030, 1, 1), today), 0);
    }
}
