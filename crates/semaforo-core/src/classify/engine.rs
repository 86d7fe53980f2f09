use crate::limits::schema::LimitsDef;
use crate::model::{MicrobiologyReading, PathogenResult, PesticideResult, RiskLevel};
use rust_decimal::Decimal;

/// Classify a microbiology reading against the configured limits.
///
/// Evaluation order is the contract:
/// 1. FAIL if any metric carries a disqualifying signal, before anything
///    else is considered. Missing or nominal metrics never mask a
///    failing one.
/// 2. ADVISORY if total coliforms sit above the advisory limit but at or
///    below the critical limit.
/// 3. UNKNOWN if nothing was measured at all.
/// 4. PASS otherwise.
///
/// Total and pure: every input shape classifies, none errors.
pub fn classify_microbiology(reading: &MicrobiologyReading, limits: &LimitsDef) -> RiskLevel {
    if reading.pathogen == PathogenResult::Positive {
        return RiskLevel::Fail;
    }
    if exceeds(reading.indicator_count, limits.indicator_critical)
        || exceeds(reading.fecal_coliform_count, limits.fecal_critical)
        || exceeds(reading.total_coliform_count, limits.total_critical)
    {
        return RiskLevel::Fail;
    }

    if let Some(total) = reading.total_coliform_count {
        // FAIL is ruled out above, so only the advisory band remains.
        if total > limits.total_advisory {
            return RiskLevel::Advisory;
        }
    }

    if !reading.has_measured_data() {
        return RiskLevel::Unknown;
    }

    RiskLevel::Pass
}

/// Strict comparison: a count exactly at its limit does not trigger.
fn exceeds(count: Option<Decimal>, limit: Decimal) -> bool {
    matches!(count, Some(v) if v > limit)
}

/// Classify a pesticide-residue screen result. Direct table lookup.
pub fn classify_pesticide(result: PesticideResult) -> RiskLevel {
    match result {
        PesticideResult::Compliant => RiskLevel::Pass,
        PesticideResult::BelowThreshold => RiskLevel::Advisory,
        PesticideResult::NonCompliant => RiskLevel::Fail,
        PesticideResult::NotTested => RiskLevel::Unknown,
    }
}
