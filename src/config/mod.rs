pub mod settings;

pub use settings::{MonitorConfig, OutputFormat, SourceConfig};
