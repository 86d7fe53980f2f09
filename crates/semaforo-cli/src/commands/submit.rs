use semaforo_core::directory::SupplierDirectory;
use semaforo_core::error::SemaforoError;
use semaforo_core::parsing::parse_date;
use semaforo_core::record::NewAnalysisRecord;
use semaforo_core::store::jsonl::JsonlStore;
use semaforo_core::store::RecordStore;
use std::path::PathBuf;

use crate::commands::MetricArgs;

pub fn run(
    directory: PathBuf,
    store_path: PathBuf,
    supplier_code: &str,
    date: Option<String>,
    metrics: &MetricArgs,
) -> Result<(), SemaforoError> {
    let directory = SupplierDirectory::load(&directory)?;
    let supplier = directory
        .find_by_code(supplier_code)
        .ok_or_else(|| SemaforoError::SupplierNotFound {
            code: supplier_code.to_string(),
        })?;
    if !supplier.active {
        return Err(SemaforoError::SupplierInactive {
            code: supplier.code.clone(),
        });
    }

    let date = match date {
        Some(d) => parse_date(&d)?,
        None => chrono::Local::now().date_naive(),
    };

    let limits = metrics.load_limits()?;
    let record = NewAnalysisRecord::evaluate(
        supplier.code.clone(),
        date,
        metrics.reading(),
        metrics.pesticide(),
        &limits,
    );
    let semaphores = record.semaphores;

    let store = JsonlStore::new(store_path);
    let id = store.append(record)?;

    println!("Recorded {id} for supplier {} ({date})", supplier.code);
    println!(
        "  Microbiology: {} ({})",
        semaphores.microbiology,
        semaphores.microbiology.style_key()
    );
    println!(
        "  Pesticide:    {} ({})",
        semaphores.pesticide,
        semaphores.pesticide.style_key()
    );

    Ok(())
}
