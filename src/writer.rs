//! Normalized CSV output.

use crate::error::Result;
use crate::event::{Event, EXPECTED_COLUMNS};
use csv::{Terminator, WriterBuilder};
use log::debug;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Writes events to `path`, creating parent directories as needed.
///
/// An existing file at `path` is overwritten.
pub fn write_cleaned(events: &[Event], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        debug!("Ensuring output directory {}", parent.display());
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    write_events(events, file)?;
    debug!("Wrote {} events to {}", events.len(), path.display());
    Ok(())
}

/// Writes the header followed by one row per event.
///
/// The header is always written, even for an empty slice. Amounts are
/// formatted with exactly 2 decimal places and records end in `\r\n`.
pub fn write_events<W: Write>(events: &[Event], writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(EXPECTED_COLUMNS)?;
    for event in events {
        csv_writer.serialize(event)?;
    }

    csv_writer.flush()?;
    Ok(())
}
