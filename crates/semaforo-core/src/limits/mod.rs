pub mod builtin;
pub mod schema;

use crate::error::SemaforoError;
use schema::LimitsDef;
use std::path::Path;

/// Load a limits definition from a JSON file.
pub fn load_limits(path: &Path) -> Result<LimitsDef, SemaforoError> {
    let content = std::fs::read_to_string(path).map_err(|e| SemaforoError::LimitsLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_limits(&content, path)
}

/// Parse a limits definition from a JSON string.
pub fn parse_limits(json: &str, source: &Path) -> Result<LimitsDef, SemaforoError> {
    let limits: LimitsDef = serde_json::from_str(json).map_err(|e| SemaforoError::LimitsLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_limits(&limits)?;
    Ok(limits)
}

/// Parse a limits definition from a JSON string (no file path context).
pub fn parse_limits_str(json: &str) -> Result<LimitsDef, SemaforoError> {
    let limits: LimitsDef = serde_json::from_str(json).map_err(SemaforoError::Json)?;
    validate_limits(&limits)?;
    Ok(limits)
}

/// Validate that a limits definition is well-formed.
pub fn validate_limits(limits: &LimitsDef) -> Result<(), SemaforoError> {
    for (field, value) in [
        ("indicator_critical", limits.indicator_critical),
        ("fecal_critical", limits.fecal_critical),
        ("total_advisory", limits.total_advisory),
        ("total_critical", limits.total_critical),
    ] {
        if value.is_sign_negative() {
            return Err(SemaforoError::LimitsInvalid(format!(
                "{field} must not be negative (got {value})"
            )));
        }
    }

    if limits.total_advisory >= limits.total_critical {
        return Err(SemaforoError::LimitsInvalid(format!(
            "total_advisory ({}) must be below total_critical ({})",
            limits.total_advisory, limits.total_critical
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_valid_limits() {
        let json = r#"{
            "name": "Test",
            "version": "1.0",
            "indicator_critical": "10",
            "fecal_critical": "10",
            "total_advisory": "100",
            "total_critical": "1000"
        }"#;
        let limits = parse_limits_str(json).unwrap();
        assert_eq!(limits.name, "Test");
        assert_eq!(limits.total_advisory, dec!(100));
        assert_eq!(limits.total_critical, dec!(1000));
    }

    #[test]
    fn advisory_at_or_above_critical_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "indicator_critical": "10",
            "fecal_critical": "10",
            "total_advisory": "1000",
            "total_critical": "1000"
        }"#;
        assert!(matches!(
            parse_limits_str(json),
            Err(SemaforoError::LimitsInvalid(_))
        ));
    }

    #[test]
    fn negative_limit_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "indicator_critical": "-1",
            "fecal_critical": "10",
            "total_advisory": "100",
            "total_critical": "1000"
        }"#;
        assert!(matches!(
            parse_limits_str(json),
            Err(SemaforoError::LimitsInvalid(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(parse_limits_str("{not json").is_err());
    }
}
