//! Input and output locations for a run.

use std::path::PathBuf;

/// Default input file, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "data/raw/events.csv";

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "data/processed/events_clean.csv";

/// Paths used by [`crate::pipeline::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Config {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Config {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH)
    }
}
