use crate::classify::{classify_microbiology, classify_pesticide};
use crate::limits::schema::LimitsDef;
use crate::model::{MicrobiologyReading, PesticideResult, RiskLevel};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The two computed semaphores stored alongside a record's raw inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemaphoreSet {
    pub microbiology: RiskLevel,
    pub pesticide: RiskLevel,
}

/// A record as submitted, before the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAnalysisRecord {
    pub supplier_code: String,
    pub date: NaiveDate,
    pub microbiology: MicrobiologyReading,
    pub pesticide: PesticideResult,
    pub semaphores: SemaphoreSet,
}

impl NewAnalysisRecord {
    /// Bundle raw inputs with freshly computed semaphores.
    ///
    /// The submission path builds records through here, so stored
    /// semaphores are always the classifiers' output for the stored
    /// reading, never hand-set values.
    pub fn evaluate(
        supplier_code: impl Into<String>,
        date: NaiveDate,
        microbiology: MicrobiologyReading,
        pesticide: PesticideResult,
        limits: &LimitsDef,
    ) -> Self {
        let semaphores = SemaphoreSet {
            microbiology: classify_microbiology(&microbiology, limits),
            pesticide: classify_pesticide(pesticide),
        };
        Self {
            supplier_code: supplier_code.into(),
            date,
            microbiology,
            pesticide,
            semaphores,
        }
    }

    /// Finish the record with the store-assigned id and timestamp.
    pub fn into_record(self, id: String, created_at: DateTime<Utc>) -> AnalysisRecord {
        AnalysisRecord {
            id,
            supplier_code: self.supplier_code,
            date: self.date,
            microbiology: self.microbiology,
            pesticide: self.pesticide,
            semaphores: self.semaphores,
            created_at,
        }
    }
}

/// A persisted analysis record. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: String,
    pub supplier_code: String,
    pub date: NaiveDate,
    pub microbiology: MicrobiologyReading,
    pub pesticide: PesticideResult,
    pub semaphores: SemaphoreSet,
    pub created_at: DateTime<Utc>,
}

impl AnalysisRecord {
    /// Replay both classifiers on the stored raw inputs and compare with
    /// the stored semaphores.
    pub fn verify_semaphores(&self, limits: &LimitsDef) -> bool {
        self.semaphores.microbiology == classify_microbiology(&self.microbiology, limits)
            && self.semaphores.pesticide == classify_pesticide(self.pesticide)
    }
}
