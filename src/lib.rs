#![forbid(unsafe_code)]
//! pathtrace: planner path-trace dumps → grouped JSON.
//!
//! Pipeline is strictly sequential: load every row (skipping and logging
//! the ones that do not parse), fold the accepted records into the
//! query/subquery/level/relation document, serialize once.
//!
//! The member crates are re-exported so callers need a single dependency.

pub mod convert;

pub use pathtrace_core::{
    parse_row, ColumnKind, ColumnSpec, Fallback, FieldValue, PathRecord, RowError, RowParser,
    SchemaVariant, TraceConfig, TraceSchema,
};
pub use pathtrace_group::{flatten_str, flatten_value, group, GroupError, Grouper, TraceDocument};
pub use pathtrace_io::{create_output, JsonWriter, LoadReport, RejectReason, RejectedRow, TraceReader};

pub use convert::{convert, load_document, ConvertSummary};
