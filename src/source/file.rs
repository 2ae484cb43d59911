use crate::parser::extract_first_number;
use crate::source::error::SourceError;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Re-reads a file on every sample. Nothing is cached between reads.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    timeout: Option<Duration>,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn sample(&self) -> Result<f64, SourceError> {
        let contents = self.read().await?;

        extract_first_number(&contents).ok_or_else(|| SourceError::NoNumberInFile {
            path: self.path.clone(),
        })
    }

    async fn read(&self) -> Result<String, SourceError> {
        let result = match self.timeout {
            Some(after) => tokio::time::timeout(after, tokio::fs::read_to_string(&self.path))
                .await
                .map_err(|_| SourceError::Timeout {
                    what: format!("file '{}'", self.path.display()),
                    after,
                })?,
            None => tokio::fs::read_to_string(&self.path).await,
        };

        result.map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SourceError::FileNotFound {
                path: self.path.clone(),
            },
            _ => SourceError::FileRead {
                path: self.path.clone(),
                source: e,
            },
        })
    }
}
