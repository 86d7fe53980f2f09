use crate::error::SemaforoError;
use crate::record::{AnalysisRecord, NewAnalysisRecord};
use crate::store::RecordStore;
use chrono::Utc;
use std::sync::Mutex;

/// In-memory store, used by tests and previews.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<AnalysisRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn append(&self, record: NewAnalysisRecord) -> Result<String, SemaforoError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| SemaforoError::Store("store mutex poisoned".into()))?;
        let id = super::record_id(records.len() + 1);
        records.push(record.into_record(id.clone(), Utc::now()));
        Ok(id)
    }

    fn list_by_supplier(&self, code: &str) -> Result<Vec<AnalysisRecord>, SemaforoError> {
        let records = self
            .records
            .lock()
            .map_err(|_| SemaforoError::Store("store mutex poisoned".into()))?;
        let mut matching: Vec<AnalysisRecord> = records
            .iter()
            .filter(|r| r.supplier_code == code)
            .cloned()
            .collect();
        super::sort_newest_first(&mut matching);
        Ok(matching)
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}
