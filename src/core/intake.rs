//! Form field parsing for the intake handlers.
//!
//! Every submitted field arrives as optional text. Each helper here turns one
//! field into a typed value and owns that field's fallback policy, so the
//! handlers never reject a submission because of a malformed optional number.

/// Rating stored when none (or an unusable one) is submitted.
pub const DEFAULT_RATING: i16 = 5;

/// Lowest accepted rating.
pub const MIN_RATING: i16 = 1;

/// Highest accepted rating.
pub const MAX_RATING: i16 = 5;

/// Trims a text field and maps blank input to `None`.
#[must_use]
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses a star rating. Missing, non-numeric, and out-of-range input all fall
/// back to [`DEFAULT_RATING`] rather than being clamped to the nearest bound.
#[must_use]
pub fn parse_rating(value: Option<&str>) -> i16 {
    value
        .and_then(|v| v.trim().parse::<i16>().ok())
        .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
        .unwrap_or(DEFAULT_RATING)
}

/// Parses a money amount. Anything that is not a finite decimal number becomes
/// zero, which the donation handler then rejects as non-positive.
#[must_use]
pub fn parse_amount(value: Option<&str>) -> f64 {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Checkbox semantics: the field counts as set when it was submitted with any
/// non-empty value.
#[must_use]
pub fn checkbox(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("   ".to_string())), None);
        assert_eq!(non_empty(Some(" Ayesha ".to_string())), Some("Ayesha".to_string()));
    }

    #[test]
    fn test_parse_rating_accepts_range() {
        assert_eq!(parse_rating(Some("1")), 1);
        assert_eq!(parse_rating(Some("3")), 3);
        assert_eq!(parse_rating(Some(" 4 ")), 4);
        assert_eq!(parse_rating(Some("5")), 5);
    }

    #[test]
    fn test_parse_rating_falls_back_to_default() {
        assert_eq!(parse_rating(None), DEFAULT_RATING);
        assert_eq!(parse_rating(Some("")), DEFAULT_RATING);
        assert_eq!(parse_rating(Some("abc")), DEFAULT_RATING);
        assert_eq!(parse_rating(Some("4.5")), DEFAULT_RATING);
        // Out of range resets to the default, not to the nearest bound
        assert_eq!(parse_rating(Some("7")), DEFAULT_RATING);
        assert_eq!(parse_rating(Some("0")), DEFAULT_RATING);
        assert_eq!(parse_rating(Some("-2")), DEFAULT_RATING);
        assert_eq!(parse_rating(Some("99999999")), DEFAULT_RATING);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(Some("100.50")), 100.5);
        assert_eq!(parse_amount(Some(" 25 ")), 25.0);
        assert_eq!(parse_amount(Some("-5")), -5.0);
        assert_eq!(parse_amount(Some("abc")), 0.0);
        assert_eq!(parse_amount(Some("")), 0.0);
        assert_eq!(parse_amount(None), 0.0);
        // Non-finite input is treated as unparsable
        assert_eq!(parse_amount(Some("inf")), 0.0);
        assert_eq!(parse_amount(Some("NaN")), 0.0);
    }

    #[test]
    fn test_checkbox() {
        assert!(checkbox(Some("on")));
        assert!(checkbox(Some("1")));
        assert!(!checkbox(Some("")));
        assert!(!checkbox(None));
    }
}
