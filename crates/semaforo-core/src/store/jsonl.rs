use crate::error::SemaforoError;
use crate::record::{AnalysisRecord, NewAnalysisRecord};
use crate::store::RecordStore;
use chrono::Utc;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// File-backed store: one JSON record per line, append-only.
#[derive(Debug)]
pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<AnalysisRecord>, SemaforoError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            // A store that has never been written to is an empty history,
            // not an error.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(SemaforoError::Io(e)),
        };
        let reader = BufReader::new(file);
        let mut records = Vec::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: AnalysisRecord = serde_json::from_str(&line).map_err(|e| {
                SemaforoError::Store(format!(
                    "corrupt record at {}:{}: {e}",
                    self.path.display(),
                    line_no + 1
                ))
            })?;
            records.push(record);
        }
        Ok(records)
    }
}

impl RecordStore for JsonlStore {
    fn append(&self, record: NewAnalysisRecord) -> Result<String, SemaforoError> {
        let existing = self.read_all()?;
        let id = super::record_id(existing.len() + 1);

        let mut line = serde_json::to_string(&record.into_record(id.clone(), Utc::now()))?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(id)
    }

    fn list_by_supplier(&self, code: &str) -> Result<Vec<AnalysisRecord>, SemaforoError> {
        let mut matching: Vec<AnalysisRecord> = self
            .read_all()?
            .into_iter()
            .filter(|r| r.supplier_code == code)
            .collect();
        super::sort_newest_first(&mut matching);
        Ok(matching)
    }

    fn backend_name(&self) -> &str {
        "jsonl"
    }
}
