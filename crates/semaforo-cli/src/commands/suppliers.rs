use semaforo_core::directory::SupplierDirectory;
use semaforo_core::error::SemaforoError;
use std::path::Path;

use crate::output;

pub fn list(directory: &Path) -> Result<(), SemaforoError> {
    let directory = SupplierDirectory::load(directory)?;
    if directory.is_empty() {
        println!("The directory contains no suppliers.");
        return Ok(());
    }
    println!("{} suppliers:\n", directory.len());
    output::table::print_suppliers(directory.suppliers());
    Ok(())
}

pub fn search(directory: &Path, query: &str) -> Result<(), SemaforoError> {
    let directory = SupplierDirectory::load(directory)?;
    let hits = directory.search_by_name(query);
    if hits.is_empty() {
        println!("No suppliers match '{query}'.");
        return Ok(());
    }
    let owned: Vec<_> = hits.into_iter().cloned().collect();
    output::table::print_suppliers(&owned);
    Ok(())
}

pub fn show(directory: &Path, code: &str) -> Result<(), SemaforoError> {
    let directory = SupplierDirectory::load(directory)?;
    let supplier = directory
        .find_by_code(code)
        .ok_or_else(|| SemaforoError::SupplierNotFound {
            code: code.to_string(),
        })?;

    println!("Code:    {}", supplier.code);
    println!("Name:    {}", supplier.name.as_deref().unwrap_or("N/A"));
    println!(
        "Origin:  {}",
        supplier.origin_region.as_deref().unwrap_or("--")
    );
    println!(
        "Status:  {}",
        if supplier.active { "active" } else { "inactive" }
    );
    Ok(())
}
