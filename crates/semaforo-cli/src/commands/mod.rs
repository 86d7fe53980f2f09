pub mod classify;
pub mod history;
pub mod limits;
pub mod submit;
pub mod suppliers;

use semaforo_core::error::SemaforoError;
use semaforo_core::limits::schema::LimitsDef;
use semaforo_core::model::{MicrobiologyReading, PathogenResult, PesticideResult};
use semaforo_core::parsing::parse_count;
use std::path::PathBuf;

/// Lab-input flags shared by `classify` and `submit`.
#[derive(clap::Args)]
pub struct MetricArgs {
    /// Pathogen presence result: negative, positive, or n/a
    #[arg(long, default_value = "n/a")]
    pub pathogen: String,

    /// Indicator organism count (cfu/g)
    #[arg(long, value_name = "COUNT")]
    pub indicator: Option<String>,

    /// Fecal coliform count (cfu/g)
    #[arg(long, value_name = "COUNT")]
    pub fecal: Option<String>,

    /// Total coliform count (cfu/g)
    #[arg(long, value_name = "COUNT")]
    pub total: Option<String>,

    /// Pesticide screen result: compliant, below-threshold, non-compliant, or n/a
    #[arg(long, default_value = "n/a")]
    pub pesticide: String,

    /// Custom limits JSON file (default: built-in limits)
    #[arg(short, long, value_name = "FILE")]
    pub limits: Option<PathBuf>,
}

impl MetricArgs {
    /// Build a reading from the raw flag values, leniently: malformed
    /// counts are treated as not measured, exactly as the preview form
    /// does.
    pub(crate) fn reading(&self) -> MicrobiologyReading {
        MicrobiologyReading {
            pathogen: PathogenResult::from_str_loose(&self.pathogen),
            indicator_count: self.indicator.as_deref().and_then(parse_count),
            fecal_coliform_count: self.fecal.as_deref().and_then(parse_count),
            total_coliform_count: self.total.as_deref().and_then(parse_count),
        }
    }

    pub(crate) fn pesticide(&self) -> PesticideResult {
        PesticideResult::from_str_loose(&self.pesticide)
    }

    /// Custom limits file if given, built-in limits otherwise.
    pub(crate) fn load_limits(&self) -> Result<LimitsDef, SemaforoError> {
        match &self.limits {
            Some(path) => semaforo_core::limits::load_limits(path),
            None => semaforo_core::limits::builtin::load_default(),
        }
    }
}
