use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Threshold configuration for the microbiology classifier.
///
/// All limits are counts per gram (cfu/g). Comparisons against them are
/// strict `>`: a count exactly at a limit does not trigger it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Critical limit for the indicator organism count.
    pub indicator_critical: Decimal,
    /// Critical limit for fecal coliforms.
    pub fecal_critical: Decimal,
    /// Advisory limit for total coliforms; counts above it but at or
    /// below `total_critical` yield ADVISORY.
    pub total_advisory: Decimal,
    /// Critical limit for total coliforms.
    pub total_critical: Decimal,
}

impl Default for LimitsDef {
    fn default() -> Self {
        Self {
            name: "Default microbiological limits".into(),
            description: Some(
                "Semaphore thresholds for supplier microbiology analyses, in cfu/g".into(),
            ),
            version: "2024.1".into(),
            indicator_critical: Decimal::from(10),
            fecal_critical: Decimal::from(10),
            total_advisory: Decimal::from(100),
            total_critical: Decimal::from(1000),
        }
    }
}
