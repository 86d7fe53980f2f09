pub mod classify;
pub mod directory;
pub mod error;
pub mod limits;
pub mod model;
pub mod parsing;
pub mod record;
pub mod store;

use classify::verdict::{self, AnalysisVerdict};
use limits::schema::LimitsDef;
use model::{MicrobiologyReading, PesticideResult};

/// Main API entry point: compute both semaphores for one input state.
///
/// The presentation layer calls this on every relevant input change and
/// once more on submit. Pure and total: any combination of absent or
/// malformed inputs yields a verdict, never an error.
pub fn evaluate(
    reading: &MicrobiologyReading,
    pesticide: PesticideResult,
    limits: &LimitsDef,
) -> AnalysisVerdict {
    AnalysisVerdict {
        microbiology: verdict::explain_microbiology(reading, limits),
        pesticide: verdict::explain_pesticide(pesticide),
    }
}
