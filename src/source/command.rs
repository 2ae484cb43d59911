use crate::parser::extract_first_number;
use crate::source::error::SourceError;
use std::process::Output;
use std::time::Duration;
use tokio::process::Command;

/// Runs a shell command on every sample and parses its stdout.
#[derive(Debug, Clone)]
pub struct CommandSource {
    command: String,
    timeout: Option<Duration>,
}

impl CommandSource {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub async fn sample(&self) -> Result<f64, SourceError> {
        let output = self.run().await?;

        if !output.status.success() {
            return Err(SourceError::CommandFailed {
                command: self.command.clone(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        tracing::trace!(command = %self.command, %stdout, "command output");

        extract_first_number(&stdout).ok_or_else(|| SourceError::NoNumberInOutput {
            command: self.command.clone(),
        })
    }

    async fn run(&self) -> Result<Output, SourceError> {
        let mut cmd = shell_command(&self.command);
        // Dropping the future on timeout must not leave the child running.
        cmd.kill_on_drop(true);

        let spawn_err = |source| SourceError::Spawn {
            command: self.command.clone(),
            source,
        };

        match self.timeout {
            Some(after) => tokio::time::timeout(after, cmd.output())
                .await
                .map_err(|_| SourceError::Timeout {
                    what: format!("command '{}'", self.command),
                    after,
                })?
                .map_err(spawn_err),
            None => cmd.output().await.map_err(spawn_err),
        }
    }
}

#[cfg(unix)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}
