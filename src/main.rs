// valuewatch: beep when a sampled number moves within a range
use clap::Parser;

use valuewatch::alerts::{Beeper, Silent};
use valuewatch::cli::Cli;
use valuewatch::config::{MonitorConfig, OutputFormat};
use valuewatch::logging::init_logging;
use valuewatch::watch::Monitor;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = MonitorConfig::from_cli(&cli)?;
    tracing::debug!(config = ?config, "Configuration loaded");

    let stdout = std::io::stdout();
    match (config.beep_enabled, config.output) {
        (false, _) => Monitor::new(&config, Silent, stdout).run().await,
        (true, OutputFormat::Text) => Monitor::new(&config, Beeper::stdout(), stdout).run().await,
        // JSON lines own stdout; the bell goes to stderr instead.
        (true, OutputFormat::Json) => Monitor::new(&config, Beeper::stderr(), stdout).run().await,
    }
}
