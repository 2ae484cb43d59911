// Utility functions module
pub mod date_format;

pub use date_format::*;
