use crate::error::SemaforoError;
use crate::limits::schema::LimitsDef;

const DEFAULT_LIMITS_JSON: &str = include_str!("../../../../limits/default.json");

/// Load the built-in default limits.
pub fn load_default() -> Result<LimitsDef, SemaforoError> {
    let limits: LimitsDef = serde_json::from_str(DEFAULT_LIMITS_JSON)?;
    super::validate_limits(&limits)?;
    Ok(limits)
}
