use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Recoverable failures while acquiring one sample. The monitor logs these
/// and tries again after the next interval.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to run command '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Command '{command}' exited with code {}: {stderr}", exit_code_label(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Unable to find a numeric value in the output of '{command}'.")]
    NoNumberInOutput { command: String },

    #[error("File '{}' not found.", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No numeric value found in '{}'.", .path.display())]
    NoNumberInFile { path: PathBuf },

    #[error("Reading {what} timed out after {:.1}s", .after.as_secs_f64())]
    Timeout { what: String, after: Duration },
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}
