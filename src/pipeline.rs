//! Read → convert → write orchestration.
//!
//! The batch is all-or-nothing: the output file is only touched once every
//! row has been read and converted successfully.

use crate::config::Config;
use crate::error::Result;
use crate::event::to_events;
use crate::reader::read_events;
use crate::writer::write_cleaned;
use log::debug;

/// Runs the pipeline and returns the number of events written.
pub fn run(config: &Config) -> Result<usize> {
    let rows = read_events(&config.input_path)?;
    let events = to_events(&rows)?;
    debug!("Converted {} rows", events.len());
    write_cleaned(&events, &config.output_path)?;
    Ok(events.len())
}
