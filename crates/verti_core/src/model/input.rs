//! Form input coercion.
//!
//! # Responsibility
//! - Turn raw form strings into typed record fields.
//! - Enforce field constraints before any mutator runs.
//!
//! # Invariants
//! - Coercion never panics and never partially applies.
//! - Only `ValidationError` leaves this module.

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::expense::{Amount, ExpenseCategory};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

static AMOUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<sign>-)?(?P<whole>\d+)(?:\.(?P<frac>\d{1,2}))?$")
        .expect("amount pattern must compile")
});

/// Field-level input rejection raised by the caller layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Text is not a decimal with at most two fractional digits.
    InvalidAmount(String),
    /// Decimal is well-formed but below zero.
    NegativeAmount(String),
    /// Decimal is well-formed but above `Amount::MAX_INPUT`.
    AmountTooLarge(String),
    EmptyProjectName,
    UnknownCategory(String),
    InvalidDate(String),
    InvalidTime(String),
    UnknownCorrespondenceKind(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAmount(value) => write!(f, "invalid amount `{value}`"),
            Self::NegativeAmount(value) => write!(f, "amount must be >= 0, got `{value}`"),
            Self::AmountTooLarge(value) => write!(
                f,
                "amount must be <= {}, got `{value}`",
                Amount::MAX_INPUT
            ),
            Self::EmptyProjectName => write!(f, "project name must not be empty"),
            Self::UnknownCategory(value) => write!(
                f,
                "unknown expense category `{value}`; expected Flight|Hotel|Meals|Transport|Misc"
            ),
            Self::InvalidDate(value) => write!(f, "invalid date `{value}`; expected YYYY-MM-DD"),
            Self::InvalidTime(value) => write!(f, "invalid time `{value}`; expected HH:MM[:SS]"),
            Self::UnknownCorrespondenceKind(value) => {
                write!(f, "unknown correspondence type `{value}`")
            }
        }
    }
}

impl Error for ValidationError {}

/// Parses a non-negative money amount such as `12.5` or `200.00`.
///
/// # Errors
/// - `NegativeAmount` for a well-formed value below zero.
/// - `AmountTooLarge` for a well-formed value above `Amount::MAX_INPUT`.
/// - `InvalidAmount` for anything else that is not `digits[.d[d]]`.
pub fn parse_amount(value: &str) -> Result<Amount, ValidationError> {
    let trimmed = value.trim();
    let captures = AMOUNT_PATTERN
        .captures(trimmed)
        .ok_or_else(|| ValidationError::InvalidAmount(trimmed.to_string()))?;

    let whole = captures
        .name("whole")
        .map(|m| m.as_str())
        .unwrap_or_default()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidAmount(trimmed.to_string()))?;
    let frac = match captures.name("frac").map(|m| m.as_str()) {
        Some(digits) if digits.len() == 1 => i64::from(digits.as_bytes()[0] - b'0') * 10,
        Some(digits) => digits
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidAmount(trimmed.to_string()))?,
        None => 0,
    };
    let cents = whole
        .checked_mul(100)
        .and_then(|value| value.checked_add(frac))
        .ok_or_else(|| ValidationError::InvalidAmount(trimmed.to_string()))?;

    if captures.name("sign").is_some() && cents > 0 {
        return Err(ValidationError::NegativeAmount(trimmed.to_string()));
    }
    let amount = Amount::from_cents(cents);
    if amount > Amount::MAX_INPUT {
        return Err(ValidationError::AmountTooLarge(trimmed.to_string()));
    }
    Ok(amount)
}

/// Parses an expense category label (case-insensitive).
pub fn parse_expense_category(value: &str) -> Result<ExpenseCategory, ValidationError> {
    let normalized = value.trim();
    ExpenseCategory::ALL
        .into_iter()
        .find(|category| category.as_str().eq_ignore_ascii_case(normalized))
        .ok_or_else(|| ValidationError::UnknownCategory(normalized.to_string()))
}

/// Parses an ISO calendar date (`YYYY-MM-DD`).
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}

/// Parses a time of day as `HH:MM` or `HH:MM:SS`.
pub fn parse_time(value: &str) -> Result<NaiveTime, ValidationError> {
    let trimmed = value.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| ValidationError::InvalidTime(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{parse_amount, parse_date, parse_expense_category, parse_time, ValidationError};
    use crate::model::expense::{Amount, ExpenseCategory};
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn parse_amount_accepts_whole_and_fractional_values() {
        assert_eq!(parse_amount("12.50").unwrap(), Amount::from_cents(1250));
        assert_eq!(parse_amount("12.5").unwrap(), Amount::from_cents(1250));
        assert_eq!(parse_amount(" 200 ").unwrap(), Amount::from_cents(20000));
        assert_eq!(parse_amount("0.07").unwrap(), Amount::from_cents(7));
        assert_eq!(parse_amount("-0").unwrap(), Amount::ZERO);
    }

    #[test]
    fn parse_amount_rejects_negative_values() {
        assert_eq!(
            parse_amount("-3.00").unwrap_err(),
            ValidationError::NegativeAmount("-3.00".to_string())
        );
    }

    #[test]
    fn parse_amount_caps_input_so_totals_stay_exact() {
        assert_eq!(
            parse_amount("100000000000.00").unwrap(),
            Amount::MAX_INPUT
        );
        assert_eq!(
            parse_amount("92233720368547758.07").unwrap_err(),
            ValidationError::AmountTooLarge("92233720368547758.07".to_string())
        );
    }

    #[test]
    fn parse_amount_rejects_malformed_values() {
        for raw in ["", "abc", "1.234", "1,50", "$5", "99999999999999999999"] {
            assert!(
                matches!(parse_amount(raw), Err(ValidationError::InvalidAmount(_))),
                "`{raw}` should be rejected"
            );
        }
    }

    #[test]
    fn parse_category_is_case_insensitive() {
        assert_eq!(
            parse_expense_category("transport").unwrap(),
            ExpenseCategory::Transport
        );
        assert_eq!(
            parse_expense_category(" Hotel ").unwrap(),
            ExpenseCategory::Hotel
        );
        assert_eq!(
            parse_expense_category("Lodging").unwrap_err(),
            ValidationError::UnknownCategory("Lodging".to_string())
        );
    }

    #[test]
    fn parse_date_and_time_accept_form_formats() {
        assert_eq!(
            parse_date("2024-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(
            parse_time("09:30").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time("09:30:15").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 15).unwrap()
        );
        assert!(matches!(
            parse_date("2024-02-30"),
            Err(ValidationError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_time("25:00"),
            Err(ValidationError::InvalidTime(_))
        ));
    }
}
