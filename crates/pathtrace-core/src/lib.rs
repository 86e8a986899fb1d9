#![forbid(unsafe_code)]
//! pathtrace-core: column schemas, typed values, and the row parser.
//!
//! A planner trace row is a tab-separated list of text fields. This crate
//! knows the two column layouts, coerces each field to its typed value, and
//! produces a [`PathRecord`] or a [`RowError`]. No IO lives here; the reader
//! in `pathtrace-io` feeds rows in and the grouper in `pathtrace-group`
//! folds the records.

pub mod config;
pub mod error;
pub mod parse;
pub mod record;
pub mod schema;
pub mod types;

pub use config::TraceConfig;
pub use error::{Error, Result, RowError};
pub use parse::{parse_row, RowParser};
pub use record::PathRecord;
pub use schema::{ColumnKind, ColumnSpec, Fallback, SchemaVariant, TraceSchema};
pub use types::FieldValue;
