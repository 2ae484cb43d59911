use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "valuewatch")]
#[command(
    about = "Periodically check a numeric value within a given range and emit an audible alert when the value changes"
)]
#[command(version)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .multiple(false)
        .args(["command", "file"]),
))]
pub struct Cli {
    /// Shell command to execute. The first floating-point number found in its stdout is the sampled value
    #[arg(long)]
    pub command: Option<String>,

    /// Path to a file containing the numeric value to monitor. The file is read on each iteration
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Sampling interval in seconds
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub interval: f64,

    /// Lower bound of the range to monitor (inclusive)
    #[arg(long = "min", allow_negative_numbers = true)]
    pub min_value: Option<f64>,

    /// Upper bound of the range to monitor (inclusive)
    #[arg(long = "max", allow_negative_numbers = true)]
    pub max_value: Option<f64>,

    /// Minimum absolute difference required to treat two samples as different
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub threshold: f64,

    /// Give up on a single command run or file read after this many seconds
    #[arg(long, allow_negative_numbers = true)]
    pub timeout: Option<f64>,

    /// Print changes as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Do not emit the audible alert
    #[arg(long)]
    pub no_beep: bool,

    /// Render timestamps in this timezone (e.g. "UTC", "Europe/Berlin") instead of local time
    #[arg(long)]
    pub timezone: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
