//! # Event Normalizer
//!
//! A batch transform that validates a CSV of user events and writes a
//! normalized copy.
//!
//! ## Design Principles
//!
//! - **Strict schema**: the header must be exactly `event_id,user_id,event_ts,event_type,amount`
//! - **All-or-nothing**: the first invalid row aborts the run before anything is written
//! - **Typed records**: every [`Event`] has passed presence and type checks
//! - **Normalized output**: amounts are written with exactly 2 decimal places
//!
//! ## Example
//!
//! ```no_run
//! use event_normalizer::{pipeline, Config};
//!
//! let written = pipeline::run(&Config::default()).unwrap();
//! println!("{} events", written);
//! ```

pub mod amount;
pub mod config;
pub mod error;
pub mod event;
pub mod pipeline;
pub mod reader;
pub mod writer;

pub use amount::Amount;
pub use config::Config;
pub use error::{PipelineError, Result};
pub use event::{to_events, Event, RawRow, EXPECTED_COLUMNS};
pub use reader::{read_events, read_rows};
pub use writer::{write_cleaned, write_events};
