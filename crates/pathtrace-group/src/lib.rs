#![forbid(unsafe_code)]
//! pathtrace-group: nested grouping of path records.
//!
//! Records are folded into
//! `queries → subqueries → levels → relations → paths`. Only the order of
//! `paths` inside a relation carries meaning; map levels are keyed and the
//! serialized key order is incidental.

pub mod document;
pub mod error;
pub mod flatten;
pub mod grouper;

pub use document::{
    LevelBucket, QueryBucket, RelationBucket, RelationKey, SubqueryBucket, TraceDocument,
};
pub use error::GroupError;
pub use flatten::{flatten_str, flatten_value};
pub use grouper::{group, Grouper};
