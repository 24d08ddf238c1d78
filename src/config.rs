//! Runtime configuration for the terminal binary.
//!
//! Every option can be given as a flag or through the environment:
//!
//! - `TETRIS_TICK_MS`: gravity tick period in milliseconds (default: 300)
//! - `TETRIS_SEED`: piece RNG seed (default: derived from the system clock)
//! - `TETRIS_LOG_FILE`: write diagnostics to this file (default: no logging)
//! - `TETRIS_LOG_LEVEL`: log filter when `RUST_LOG` is unset (default: "info")

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "tetris-grid", version, about = "Falling blocks in the terminal")]
pub struct Config {
    /// Gravity tick period in milliseconds
    #[arg(
        long,
        env = "TETRIS_TICK_MS",
        default_value_t = TICK_MS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub tick_ms: u32,

    /// Seed for piece selection; the same seed replays the same pieces
    #[arg(long, env = "TETRIS_SEED")]
    pub seed: Option<u32>,

    /// Write diagnostics to this file (the terminal belongs to the game)
    #[arg(long, env = "TETRIS_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "TETRIS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// The configured seed, or one derived from the system clock.
    pub fn resolved_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}
