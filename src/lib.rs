//! Normalize delimiter-separated datasets of unknown dialect into
//! analysis-ready columns.
//!
//! The pipeline infers the field delimiter from character statistics,
//! sanitizes every record (whitespace pruning, repeated-delimiter
//! repair, date/time canonicalization to Unix epoch seconds), derives a
//! per-field type scheme by dataset-wide consensus, formats records
//! against that scheme, and parses the result into an owned
//! column-major table with a numeric ("plottable") projection.
//!
//! # Example
//!
//! ```no_run
//! use tabprep::processor::DatasetProcessor;
//!
//! # fn main() -> tabprep::Result<()> {
//! let mut processor = DatasetProcessor::new("readings.csv".into(), None)?;
//! let stats = processor.process()?;
//! println!("{} plottable fields", stats.plottable_fields);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod delimiter;
pub mod error;
pub mod format;
pub mod models;
pub mod processor;
pub mod sanitize;
pub mod scan;
pub mod stats;
pub mod temporal;
pub mod typing;
pub mod units;

pub use config::{MissingPolicy, PrepConfig};
pub use error::{PrepError, Result};
pub use models::{Dataset, DatasetProfile, FieldType, ProcessingStats, Value};
pub use processor::DatasetProcessor;
