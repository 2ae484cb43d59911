// Where samples come from: a shell command or a file
pub mod command;
pub mod error;
pub mod file;

pub use command::CommandSource;
pub use error::SourceError;
pub use file::FileSource;

use crate::config::SourceConfig;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Source {
    Command(CommandSource),
    File(FileSource),
}

impl Source {
    pub fn from_config(config: &SourceConfig, timeout: Option<Duration>) -> Self {
        match config {
            SourceConfig::Command(command) => {
                Source::Command(CommandSource::new(command.clone()).with_timeout(timeout))
            }
            SourceConfig::File(path) => {
                Source::File(FileSource::new(path.clone()).with_timeout(timeout))
            }
        }
    }

    /// Acquire one sample.
    pub async fn sample(&self) -> Result<f64, SourceError> {
        match self {
            Source::Command(source) => source.sample().await,
            Source::File(source) => source.sample().await,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Source::Command(source) => format!("command '{}'", source.command()),
            Source::File(source) => format!("file '{}'", source.path().display()),
        }
    }
}
