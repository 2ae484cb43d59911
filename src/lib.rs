// valuewatch library crate
// Exposes modules for integration testing

pub mod alerts;
pub mod cli;
pub mod config;
pub mod logging;
pub mod parser;
pub mod source;
pub mod utils;
pub mod watch;
