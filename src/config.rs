use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::constants::TICK_INTERVAL_MS;

/// Classic falling-block puzzle in the terminal.
///
/// Arrow keys move and rotate, P pauses, R restarts, Q quits.
#[derive(Debug, Parser)]
#[command(name = "blockfall", version, about)]
pub struct Args {
    /// Milliseconds between gravity steps.
    #[arg(long, value_name = "MS", default_value_t = TICK_INTERVAL_MS, env = "BLOCKFALL_TICK_MS")]
    pub tick_ms: u64,

    /// Seed for the piece generator. Random when omitted.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default `info`).
    #[arg(long, value_name = "PATH", env = "BLOCKFALL_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
}

/// Engine settings derived from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub tick_interval: Duration,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            seed: None,
        }
    }
}

impl Args {
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        Ok(Settings {
            tick_interval: Duration::from_millis(self.tick_ms),
            seed: self.seed,
        })
    }
}
