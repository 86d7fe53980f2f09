use semaforo_core::error::SemaforoError;
use semaforo_core::limits;
use std::path::Path;

use crate::output;

pub fn show() -> Result<(), SemaforoError> {
    let limits = limits::builtin::load_default()?;
    output::table::print_limits(&limits);
    Ok(())
}

pub fn schema() -> Result<(), SemaforoError> {
    print!(
        r#"JSON Limits Schema
==================

A limits file configures the thresholds the microbiology classifier
compares counts against. All values are counts per gram (cfu/g), and
every comparison is strict: a count exactly at a limit does not
trigger it.

Fields:
  name               (string, required)  Human-readable name
  description        (string, optional)  What these limits are for
  version            (string, required)  Version identifier (e.g., "2024.1")
  indicator_critical (string, required)  Critical limit for the indicator
                                         organism count. Above it -> FAIL.
  fecal_critical     (string, required)  Critical limit for fecal
                                         coliforms. Above it -> FAIL.
  total_advisory     (string, required)  Advisory limit for total
                                         coliforms. Above it (but at or
                                         below total_critical) -> ADVISORY.
  total_critical     (string, required)  Critical limit for total
                                         coliforms. Above it -> FAIL.

total_advisory must be below total_critical.

Example:
{{
  "name": "Site-specific limits",
  "description": "Tightened limits for ready-to-eat produce",
  "version": "1.0",
  "indicator_critical": "5",
  "fecal_critical": "5",
  "total_advisory": "50",
  "total_critical": "500"
}}

Note: threshold values must be quoted strings, not bare numbers,
to preserve exact decimal precision (e.g., "0.5" not 0.5).
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), SemaforoError> {
    let limits = limits::load_limits(file)?;

    println!("Limits '{}' (v{}) are valid.", limits.name, limits.version);
    println!("  indicator_critical: {} cfu/g", limits.indicator_critical);
    println!("  fecal_critical:     {} cfu/g", limits.fecal_critical);
    println!("  total_advisory:     {} cfu/g", limits.total_advisory);
    println!("  total_critical:     {} cfu/g", limits.total_critical);
    Ok(())
}
