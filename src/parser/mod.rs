// Numeric value extraction from raw source text
pub mod value;

pub use value::{extract_first_number, format_value};
