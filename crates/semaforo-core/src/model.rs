use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative pathogen presence assay result (e.g. Salmonella).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PathogenResult {
    Negative,
    Positive,
    #[default]
    NotTested,
}

impl fmt::Display for PathogenResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathogenResult::Negative => write!(f, "NEGATIVE"),
            PathogenResult::Positive => write!(f, "POSITIVE"),
            PathogenResult::NotTested => write!(f, "N/A"),
        }
    }
}

impl PathogenResult {
    /// Lenient form-input parsing; anything unrecognized is NotTested.
    pub fn from_str_loose(s: &str) -> PathogenResult {
        let lower = s.trim().to_lowercase();
        if lower.starts_with("pos") {
            PathogenResult::Positive
        } else if lower.starts_with("neg") {
            PathogenResult::Negative
        } else {
            PathogenResult::NotTested
        }
    }
}

/// Categorical pesticide-residue screen result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PesticideResult {
    Compliant,
    BelowThreshold,
    NonCompliant,
    #[default]
    NotTested,
}

impl fmt::Display for PesticideResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PesticideResult::Compliant => write!(f, "COMPLIANT"),
            PesticideResult::BelowThreshold => write!(f, "BELOW THRESHOLD"),
            PesticideResult::NonCompliant => write!(f, "NON-COMPLIANT"),
            PesticideResult::NotTested => write!(f, "N/A"),
        }
    }
}

impl PesticideResult {
    /// Lenient form-input parsing; anything unrecognized is NotTested.
    pub fn from_str_loose(s: &str) -> PesticideResult {
        let lower = s.trim().to_lowercase();
        if lower.contains("non") {
            PesticideResult::NonCompliant
        } else if lower.contains("below") {
            PesticideResult::BelowThreshold
        } else if lower.contains("compliant") {
            PesticideResult::Compliant
        } else {
            PesticideResult::NotTested
        }
    }
}

/// Traffic-light risk level for one semaphore.
///
/// Declaration order is the combination lattice: FAIL outranks ADVISORY
/// outranks PASS outranks UNKNOWN, so "any metric triggers this level"
/// is `max` over per-metric levels.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    #[default]
    Unknown,
    Pass,
    Advisory,
    Fail,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Unknown => write!(f, "UNKNOWN"),
            RiskLevel::Pass => write!(f, "PASS"),
            RiskLevel::Advisory => write!(f, "ADVISORY"),
            RiskLevel::Fail => write!(f, "FAIL"),
        }
    }
}

impl RiskLevel {
    /// Presentation style key for the traffic-light indicator.
    ///
    /// The semantic level maps to its style key through this one table,
    /// never by transforming display strings at runtime.
    pub fn style_key(self) -> &'static str {
        match self {
            RiskLevel::Unknown => "gray",
            RiskLevel::Pass => "green",
            RiskLevel::Advisory => "yellow",
            RiskLevel::Fail => "red",
        }
    }
}

/// The metrics that feed the microbiology semaphore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Pathogen,
    IndicatorOrganism,
    FecalColiform,
    TotalColiform,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Pathogen => write!(f, "pathogen"),
            Metric::IndicatorOrganism => write!(f, "indicator organism"),
            Metric::FecalColiform => write!(f, "fecal coliforms"),
            Metric::TotalColiform => write!(f, "total coliforms"),
        }
    }
}

/// One microbiological analysis as entered by the operator.
///
/// Absent counts mean "not measured"; the classifier accepts any shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicrobiologyReading {
    #[serde(default)]
    pub pathogen: PathogenResult,
    /// Fast-indicator organism count (e.g. E. coli), cfu/g.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicator_count: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecal_coliform_count: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_coliform_count: Option<Decimal>,
}

impl MicrobiologyReading {
    /// True if at least one metric carries a measured, non-trivial value.
    ///
    /// A count of exactly zero counts as "no data" here, and only here;
    /// threshold comparisons still see it as a measured value.
    pub fn has_measured_data(&self) -> bool {
        if self.pathogen != PathogenResult::NotTested {
            return true;
        }
        [
            self.indicator_count,
            self.fecal_coliform_count,
            self.total_coliform_count,
        ]
        .iter()
        .any(|c| matches!(c, Some(v) if !v.is_zero()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn pathogen_from_str_loose() {
        assert_eq!(
            PathogenResult::from_str_loose("POSITIVE"),
            PathogenResult::Positive
        );
        assert_eq!(
            PathogenResult::from_str_loose("negative"),
            PathogenResult::Negative
        );
        assert_eq!(
            PathogenResult::from_str_loose(" Neg "),
            PathogenResult::Negative
        );
        assert_eq!(
            PathogenResult::from_str_loose("N/A"),
            PathogenResult::NotTested
        );
        assert_eq!(
            PathogenResult::from_str_loose(""),
            PathogenResult::NotTested
        );
        assert_eq!(
            PathogenResult::from_str_loose("maybe"),
            PathogenResult::NotTested
        );
    }

    #[test]
    fn pesticide_from_str_loose() {
        assert_eq!(
            PesticideResult::from_str_loose("compliant"),
            PesticideResult::Compliant
        );
        assert_eq!(
            PesticideResult::from_str_loose("NON-COMPLIANT"),
            PesticideResult::NonCompliant
        );
        assert_eq!(
            PesticideResult::from_str_loose("below-threshold"),
            PesticideResult::BelowThreshold
        );
        assert_eq!(
            PesticideResult::from_str_loose("below threshold"),
            PesticideResult::BelowThreshold
        );
        assert_eq!(
            PesticideResult::from_str_loose("n/a"),
            PesticideResult::NotTested
        );
        assert_eq!(
            PesticideResult::from_str_loose("whatever"),
            PesticideResult::NotTested
        );
    }

    #[test]
    fn risk_level_ordering_is_the_precedence_lattice() {
        assert!(RiskLevel::Fail > RiskLevel::Advisory);
        assert!(RiskLevel::Advisory > RiskLevel::Pass);
        assert!(RiskLevel::Pass > RiskLevel::Unknown);
    }

    #[test]
    fn style_keys() {
        assert_eq!(RiskLevel::Unknown.style_key(), "gray");
        assert_eq!(RiskLevel::Pass.style_key(), "green");
        assert_eq!(RiskLevel::Advisory.style_key(), "yellow");
        assert_eq!(RiskLevel::Fail.style_key(), "red");
    }

    #[test]
    fn risk_level_serializes_as_canonical_labels() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::Advisory).unwrap(),
            "\"ADVISORY\""
        );
        assert_eq!(
            serde_json::from_str::<RiskLevel>("\"UNKNOWN\"").unwrap(),
            RiskLevel::Unknown
        );
    }

    #[test]
    fn has_measured_data_ignores_zero_counts() {
        let reading = MicrobiologyReading {
            pathogen: PathogenResult::NotTested,
            indicator_count: Some(dec!(0)),
            fecal_coliform_count: Some(dec!(0)),
            total_coliform_count: None,
        };
        assert!(!reading.has_measured_data());
    }

    #[test]
    fn has_measured_data_counts_negative_pathogen_as_data() {
        let reading = MicrobiologyReading {
            pathogen: PathogenResult::Negative,
            ..Default::default()
        };
        assert!(reading.has_measured_data());
    }

    #[test]
    fn has_measured_data_counts_nonzero_count_as_data() {
        let reading = MicrobiologyReading {
            total_coliform_count: Some(dec!(0.5)),
            ..Default::default()
        };
        assert!(reading.has_measured_data());
    }
}
