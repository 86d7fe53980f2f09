use semaforo_core::error::SemaforoError;

use crate::commands::MetricArgs;
use crate::output;

pub fn run(metrics: &MetricArgs, output_format: &str, verbose: bool) -> Result<(), SemaforoError> {
    let limits = metrics.load_limits()?;
    let reading = metrics.reading();

    let verdict = semaforo_core::evaluate(&reading, metrics.pesticide(), &limits);

    match output_format {
        "json" => output::json::print(&verdict)?,
        _ => output::table::print_verdict(&verdict, verbose),
    }

    Ok(())
}
