use crate::alerts::Range;
use crate::cli::Cli;
use anyhow::{Context, Result};
use chrono_tz::Tz;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum SourceConfig {
    Command(String),
    File(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Everything the monitor needs, fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub source: SourceConfig,
    pub interval: Duration,
    pub range: Range,
    pub threshold: f64,
    pub timeout: Option<Duration>,
    pub output: OutputFormat,
    pub beep_enabled: bool,
    pub timezone: Option<Tz>,
}

impl MonitorConfig {
    pub fn new(source: SourceConfig) -> Self {
        Self {
            source,
            interval: Duration::from_secs(1),
            range: Range::unbounded(),
            threshold: 0.0,
            timeout: None,
            output: OutputFormat::Text,
            beep_enabled: true,
            timezone: None,
        }
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let source = match (&cli.command, &cli.file) {
            (Some(command), None) => SourceConfig::Command(command.clone()),
            (None, Some(path)) => SourceConfig::File(path.clone()),
            (Some(_), Some(_)) => anyhow::bail!("--command and --file are mutually exclusive"),
            (None, None) => anyhow::bail!("One of --command or --file is required"),
        };

        let interval = seconds("interval", cli.interval)?;
        let timeout = cli
            .timeout
            .map(|secs| seconds("timeout", secs))
            .transpose()?;

        let timezone = cli
            .timezone
            .as_deref()
            .map(|name| {
                Tz::from_str(name).map_err(|e| anyhow::anyhow!("Invalid timezone '{}': {}", name, e))
            })
            .transpose()?;

        let range = Range::new(cli.min_value, cli.max_value);
        if range.is_inverted() {
            tracing::warn!(
                min = ?range.min,
                max = ?range.max,
                "Range is inverted, every sample will be out of range"
            );
        }
        if cli.threshold < 0.0 {
            tracing::warn!(
                threshold = cli.threshold,
                "Negative threshold, every in-range sample after the first will be reported"
            );
        }

        Ok(Self {
            source,
            interval,
            range,
            threshold: cli.threshold,
            timeout,
            output: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            beep_enabled: !cli.no_beep,
            timezone,
        })
    }
}

fn seconds(name: &str, value: f64) -> Result<Duration> {
    if !value.is_finite() || value <= 0.0 {
        anyhow::bail!("--{} must be a positive number of seconds, got {}", name, value);
    }
    Duration::try_from_secs_f64(value).with_context(|| format!("Invalid --{} value: {}", name, value))
}
