pub mod jsonl;
pub mod memory;

use crate::error::SemaforoError;
use crate::record::{AnalysisRecord, NewAnalysisRecord};

/// Trait for record store backends.
///
/// Stores are append-only: records are never mutated or deleted once
/// written. Failures surface as errors, never as silently empty results.
pub trait RecordStore: Send + Sync {
    /// Append a new record, assigning its id and creation timestamp.
    fn append(&self, record: NewAnalysisRecord) -> Result<String, SemaforoError>;

    /// All records for a supplier, newest first.
    fn list_by_supplier(&self, code: &str) -> Result<Vec<AnalysisRecord>, SemaforoError>;

    /// Name of this store backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Creation-timestamp descending; ids (zero-padded sequence numbers)
/// break ties so listing order is deterministic.
fn sort_newest_first(records: &mut [AnalysisRecord]) {
    records.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

fn record_id(seq: usize) -> String {
    format!("rec_{seq:06}")
}
