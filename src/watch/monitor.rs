use crate::alerts::{AlertSink, ChangeDetector};
use crate::config::{MonitorConfig, OutputFormat};
use crate::source::Source;
use crate::utils::TimestampFormatter;
use crate::watch::events::ChangeEvent;
use anyhow::{Context, Result};
use chrono::Utc;
use std::io::Write;
use std::time::Duration;

/// The sampling loop: acquire, gate, compare, report, sleep.
///
/// Runs on a single task. Each iteration blocks on the source read, then
/// sleeps the configured interval; nothing overlaps.
pub struct Monitor<A: AlertSink, W: Write> {
    source: Source,
    detector: ChangeDetector,
    alert: A,
    out: W,
    interval: Duration,
    output: OutputFormat,
    formatter: TimestampFormatter,
}

impl<A: AlertSink, W: Write> Monitor<A, W> {
    pub fn new(config: &MonitorConfig, alert: A, out: W) -> Self {
        Self {
            source: Source::from_config(&config.source, config.timeout),
            detector: ChangeDetector::new(config.range, config.threshold),
            alert,
            out,
            interval: config.interval,
            output: config.output,
            formatter: TimestampFormatter::new(config.timezone),
        }
    }

    pub fn baseline(&self) -> Option<f64> {
        self.detector.baseline()
    }

    pub fn alerts(&self) -> &A {
        &self.alert
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// One iteration without the trailing sleep.
    ///
    /// Source failures are logged and yield `Ok(None)`; only a failure to
    /// write the change line to the output is returned as an error.
    pub async fn step(&mut self) -> Result<Option<ChangeEvent>> {
        let value = match self.source.sample().await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("{e}");
                return Ok(None);
            }
        };
        tracing::debug!(value, baseline = ?self.detector.baseline(), "sampled");

        let Some(change) = self.detector.observe(value) else {
            return Ok(None);
        };

        let event = ChangeEvent::new(change, Utc::now());
        self.alert.alert();
        self.report(&event)?;
        Ok(Some(event))
    }

    /// Loop until the process is killed.
    pub async fn run(&mut self) -> Result<()> {
        tracing::info!(
            source = %self.source.describe(),
            interval_secs = self.interval.as_secs_f64(),
            "Monitoring started"
        );

        loop {
            if let Err(e) = self.step().await {
                tracing::error!("{e:#}");
            }
            tokio::time::sleep(self.interval).await;
        }
    }

    fn report(&mut self, event: &ChangeEvent) -> Result<()> {
        let line = match self.output {
            OutputFormat::Text => event.to_text_line(&self.formatter),
            OutputFormat::Json => event.to_json_line(&self.formatter)?,
        };
        writeln!(self.out, "{line}").context("Failed to write change line")?;
        self.out.flush().context("Failed to flush output")?;
        Ok(())
    }
}
