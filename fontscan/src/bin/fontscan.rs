//! Interactive glyph scanner
//!
//! ```text
//! fontscan <directory> [--text] [--threshold N] [--output DIR]
//! ```
//!
//! Set `RUST_LOG` to change log verbosity (default `info`).

use fontscan::{ConsoleLabeler, ScanConfig, ScanError, USAGE};
use log::{error, info};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match ScanConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            return ExitCode::from(2);
        }
    };

    match fontscan::run(&config, ConsoleLabeler::new()) {
        Ok(summary) => {
            info!(
                "done: {} glyphs labeled from {} images",
                summary.labeled(),
                summary.images.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) if e.is_cancelled() => {
            info!("cancelled; glyphs already labeled were kept");
            ExitCode::SUCCESS
        }
        Err(e @ ScanError::Config(_)) => {
            eprintln!("{}\n\n{}", e, USAGE);
            ExitCode::from(2)
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
