//! Validation utilities for CLI arguments and config values
//!
//! Each validator returns the parsed value or a message suitable for clap's
//! error output, so they double as `value_parser` functions.

use crate::queue::api::{LaneId, MAX_PERIOD_SECS};
use std::str::FromStr;

pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];
pub const LOG_FORMATS: &[&str] = &["text", "ext", "json"];

/// Validate a whole number of seconds between 1 and one day
pub fn validate_positive_secs(value: &str) -> Result<u64, String> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err("Value must be greater than 0".to_string()),
        Ok(n) if n > MAX_PERIOD_SECS => Err(format!(
            "Value must not exceed {} seconds",
            MAX_PERIOD_SECS
        )),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{}' is not a valid number of seconds", value)),
    }
}

/// Validate a lane name ("quick" or "long", any case)
pub fn validate_lane(value: &str) -> Result<LaneId, String> {
    LaneId::from_str(value.trim())
        .map_err(|_| format!("'{}' is not a lane (expected 'quick' or 'long')", value))
}

pub fn validate_log_level(value: &str) -> Result<String, String> {
    validate_choice(value, LOG_LEVELS, "log level")
}

pub fn validate_log_format(value: &str) -> Result<String, String> {
    validate_choice(value, LOG_FORMATS, "log format")
}

fn validate_choice(value: &str, allowed: &[&str], what: &str) -> Result<String, String> {
    let lowered = value.trim().to_ascii_lowercase();
    if allowed.contains(&lowered.as_str()) {
        Ok(lowered)
    } else {
        Err(format!(
            "'{}' is not a valid {} (expected one of: {})",
            value,
            what,
            allowed.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_secs() {
        assert_eq!(validate_positive_secs("3").unwrap(), 3);
        assert_eq!(validate_positive_secs(" 10 ").unwrap(), 10);
        assert!(validate_positive_secs("0").is_err());
        assert!(validate_positive_secs("-5").is_err());
        assert!(validate_positive_secs("2.5").is_err());
        assert!(validate_positive_secs("soon").is_err());
    }

    #[test]
    fn test_validate_positive_secs_upper_bound() {
        assert_eq!(validate_positive_secs("86400").unwrap(), MAX_PERIOD_SECS);
        let err = validate_positive_secs("86401").unwrap_err();
        assert!(err.contains("86400"));
        assert!(validate_positive_secs("18446744073709551615").is_err());
        // beyond u64 entirely
        assert!(validate_positive_secs("18446744073709551616").is_err());
    }

    #[test]
    fn test_validate_lane() {
        assert_eq!(validate_lane("quick").unwrap(), LaneId::Quick);
        assert_eq!(validate_lane("LONG").unwrap(), LaneId::Long);
        assert_eq!(validate_lane(" Quick ").unwrap(), LaneId::Quick);
        let err = validate_lane("medium").unwrap_err();
        assert!(err.contains("'medium'"));
    }

    #[test]
    fn test_validate_log_choices() {
        assert_eq!(validate_log_level("DEBUG").unwrap(), "debug");
        assert!(validate_log_level("loud").is_err());
        assert_eq!(validate_log_format("json").unwrap(), "json");
        let err = validate_log_format("xml").unwrap_err();
        assert!(err.contains("text, ext, json"));
    }
}
