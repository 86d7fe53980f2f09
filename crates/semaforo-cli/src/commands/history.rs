use semaforo_core::error::SemaforoError;
use semaforo_core::store::jsonl::JsonlStore;
use semaforo_core::store::RecordStore;
use std::path::PathBuf;

use crate::output;

pub fn run(store_path: PathBuf, supplier_code: &str, output_format: &str) -> Result<(), SemaforoError> {
    let store = JsonlStore::new(store_path);
    let records = store.list_by_supplier(supplier_code)?;

    match output_format {
        "json" => output::json::print(&records)?,
        _ => output::table::print_history(supplier_code, &records),
    }

    Ok(())
}
