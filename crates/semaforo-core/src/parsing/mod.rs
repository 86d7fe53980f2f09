pub mod values;

pub use values::{parse_count, parse_date};
