//! Integration tests for the full preview -> submit -> history flow.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use semaforo_core::directory::SupplierDirectory;
use semaforo_core::error::SemaforoError;
use semaforo_core::limits::schema::LimitsDef;
use semaforo_core::model::{MicrobiologyReading, PathogenResult, PesticideResult, RiskLevel};
use semaforo_core::record::NewAnalysisRecord;
use semaforo_core::store::jsonl::JsonlStore;
use semaforo_core::store::memory::MemoryStore;
use semaforo_core::store::RecordStore;

const DIRECTORY_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Proveedores>
  <Details Cve_Prov="F001" Nom_Prov="Agroindustrias del Valle" Edo_Origen="Jalisco" Estatus="Activo"/>
  <Details Cve_Prov="F002" Nom_Prov="Frutas El Campo" Edo_Origen="Michoacan" Estatus="Inactivo"/>
</Proveedores>"#;

fn advisory_reading() -> MicrobiologyReading {
    // Total coliforms 150 exceeds advisory 100 but not critical 1000;
    // everything else nominal.
    MicrobiologyReading {
        pathogen: PathogenResult::Negative,
        indicator_count: Some(dec!(5)),
        fecal_coliform_count: Some(dec!(3)),
        total_coliform_count: Some(dec!(150)),
    }
}

// ---------------------------------------------------------------------------
// Test 1: The end-to-end ADVISORY scenario through preview and store
// ---------------------------------------------------------------------------
#[test]
fn advisory_scenario_preview_submit_history() {
    let limits = LimitsDef::default();
    let directory = SupplierDirectory::from_xml_str(DIRECTORY_XML).unwrap();
    let supplier = directory.find_by_code("F001").unwrap();
    assert!(supplier.active);

    // Preview: both semaphores come back ADVISORY.
    let verdict = semaforo_core::evaluate(
        &advisory_reading(),
        PesticideResult::BelowThreshold,
        &limits,
    );
    assert_eq!(verdict.microbiology.level, RiskLevel::Advisory);
    assert_eq!(verdict.pesticide.level, RiskLevel::Advisory);

    // Submit: the stored record carries both as ADVISORY.
    let store = MemoryStore::new();
    let record = NewAnalysisRecord::evaluate(
        supplier.code.clone(),
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        advisory_reading(),
        PesticideResult::BelowThreshold,
        &limits,
    );
    let id = store.append(record).unwrap();

    // History: the submission is visible to a subsequent read.
    let history = store.list_by_supplier("F001").unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, id);
    assert_eq!(history[0].semaphores.microbiology, RiskLevel::Advisory);
    assert_eq!(history[0].semaphores.pesticide, RiskLevel::Advisory);
    assert!(history[0].verify_semaphores(&limits));
}

// ---------------------------------------------------------------------------
// Test 2: A failing metric is never masked by absent data elsewhere
// ---------------------------------------------------------------------------
#[test]
fn failing_metric_survives_submission_with_missing_data() {
    let limits = LimitsDef::default();
    let store = MemoryStore::new();

    let reading = MicrobiologyReading {
        pathogen: PathogenResult::NotTested,
        indicator_count: None,
        fecal_coliform_count: Some(dec!(12)),
        total_coliform_count: None,
    };
    let record = NewAnalysisRecord::evaluate(
        "F001",
        NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(),
        reading,
        PesticideResult::NotTested,
        &limits,
    );
    store.append(record).unwrap();

    let history = store.list_by_supplier("F001").unwrap();
    assert_eq!(history[0].semaphores.microbiology, RiskLevel::Fail);
    assert_eq!(history[0].semaphores.pesticide, RiskLevel::Unknown);
}

// ---------------------------------------------------------------------------
// Test 3: File-backed store persists across handles
// ---------------------------------------------------------------------------
#[test]
fn jsonl_store_persists_across_handles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registros.jsonl");
    let limits = LimitsDef::default();

    {
        let store = JsonlStore::new(&path);
        let record = NewAnalysisRecord::evaluate(
            "F001",
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            advisory_reading(),
            PesticideResult::BelowThreshold,
            &limits,
        );
        store.append(record).unwrap();
    }

    let reopened = JsonlStore::new(&path);
    let history = reopened.list_by_supplier("F001").unwrap();
    assert_eq!(history.len(), 1);
    assert!(history[0].verify_semaphores(&limits));
}

// ---------------------------------------------------------------------------
// Test 4: Directory lookups distinguish missing from inactive
// ---------------------------------------------------------------------------
#[test]
fn directory_lookup_and_inactive_flag() {
    let directory = SupplierDirectory::from_xml_str(DIRECTORY_XML).unwrap();
    assert!(directory.find_by_code("F999").is_none());
    let inactive = directory.find_by_code("F002").unwrap();
    assert!(!inactive.active);
}

// ---------------------------------------------------------------------------
// Test 5: Collaborator failures surface as distinguishable errors
// ---------------------------------------------------------------------------
#[test]
fn directory_load_failure_is_distinguishable() {
    let result = SupplierDirectory::load(std::path::Path::new("/nonexistent/PROVEEDORES.xml"));
    assert!(matches!(result, Err(SemaforoError::DirectoryLoad { .. })));
}
