#![forbid(unsafe_code)]
//! pathtrace-io: reading planner trace dumps and writing the grouped JSON.
//!
//! The reader owns the skip-and-log policy: a row that fails to coerce is
//! logged and dropped, and only IO failures abort a load.

pub mod error;
pub mod readers;
pub mod writers;

pub use error::{Error, Result};
pub use readers::tsv::{LoadReport, RejectReason, RejectedRow, TraceReader};
pub use writers::json::{create_output, JsonWriter};
