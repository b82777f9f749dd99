//! Event Normalizer CLI
//!
//! Reads `data/raw/events.csv`, validates and converts every row, and writes
//! `data/processed/events_clean.csv`. Paths are relative to the working directory.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use event_normalizer::{pipeline, Config, Result};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::default();
    let written = pipeline::run(&config)?;
    println!(
        "Wrote {} cleaned events to {}",
        written,
        config.output_path.display()
    );
    Ok(())
}
