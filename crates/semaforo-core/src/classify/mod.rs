pub mod engine;
pub mod verdict;

pub use engine::{classify_microbiology, classify_pesticide};
