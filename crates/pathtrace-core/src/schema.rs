//! Column layouts for planner trace rows. Pure data; no IO here.
//!
//! Two layouts exist. Variant A (23 columns) carries the `add_path`
//! comparison details; variant B (14 columns) is the older compact dump with
//! a subquery type and a deletion flag. Both are described by the same
//! per-column table so one parser handles either.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Target type a raw text field is coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    Int,
    Float,
    /// `t` is true, any other non-null text is false.
    Bool,
    Text,
    /// Brace-delimited integer list such as `{1,2,3}`.
    IntList,
}

/// What a column becomes when its value is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fallback {
    /// Stays null.
    Absent,
    /// Substituted with a fixed integer.
    Int(i64),
    /// Substituted with `rel_<rel_id>`.
    RelName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
    pub fallback: Fallback,
}

impl ColumnSpec {
    pub const fn new(name: &'static str, kind: ColumnKind) -> Self {
        Self {
            name,
            kind,
            fallback: Fallback::Absent,
        }
    }

    pub const fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }
}

const fn col(name: &'static str, kind: ColumnKind) -> ColumnSpec {
    ColumnSpec::new(name, kind)
}

use ColumnKind::{Bool, Float, Int, IntList, Text};

const VARIANT_A: [ColumnSpec; 23] = [
    col("query_id", Int),
    col("subquery_id", Int).with_fallback(Fallback::Int(1)),
    col("subquery_level", Int),
    col("rel_id", Int),
    col("path_id", Int),
    col("path_type", Text),
    col("child_paths", IntList),
    col("startup_cost", Float),
    col("total_cost", Float),
    col("rows", Int),
    col("width", Int),
    col("rel_name", Text).with_fallback(Fallback::RelName),
    col("rel_alias", Text),
    col("indexoid", Int),
    col("level", Int).with_fallback(Fallback::Int(0)),
    col("add_path_result", Text),
    col("displaced_by", Int),
    col("cost_cmp", Text),
    col("fuzz_factor", Float),
    col("pathkeys_cmp", Text),
    col("bms_cmp", Text),
    col("rows_cmp", Text),
    col("parallel_safe_cmp", Text),
];

const VARIANT_B: [ColumnSpec; 14] = [
    col("query_id", Int),
    col("subquery_type", Text),
    col("subquery_id", Int).with_fallback(Fallback::Int(1)),
    col("rel_id", Int),
    col("path_id", Int),
    col("path_type", Text),
    col("child_paths", IntList),
    col("startup_cost", Float),
    col("total_cost", Float),
    col("rows", Float),
    col("is_del", Bool),
    col("rel_name", Text).with_fallback(Fallback::RelName),
    col("indexoid", Int),
    col("level", Int).with_fallback(Fallback::Int(0)),
];

/// Which trace layout a file uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVariant {
    /// 23 columns, with alias and `add_path` comparison results.
    A,
    /// 14 columns, with subquery type and deletion flag.
    B,
}

impl SchemaVariant {
    pub fn columns(self) -> &'static [ColumnSpec] {
        match self {
            SchemaVariant::A => &VARIANT_A,
            SchemaVariant::B => &VARIANT_B,
        }
    }

    /// Guess the layout from the width of a row. Rows may be short, so
    /// anything wider than the compact layout is taken to be variant A.
    pub fn detect(column_count: usize) -> Self {
        if column_count > VARIANT_B.len() {
            SchemaVariant::A
        } else {
            SchemaVariant::B
        }
    }

    pub fn schema(self) -> TraceSchema {
        TraceSchema::new(self)
    }
}

impl fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaVariant::A => f.write_str("a"),
            SchemaVariant::B => f.write_str("b"),
        }
    }
}

impl FromStr for SchemaVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "variant-a" | "extended" => Ok(SchemaVariant::A),
            "b" | "variant-b" | "compact" => Ok(SchemaVariant::B),
            other => Err(Error::Config(format!("unknown schema variant '{other}'"))),
        }
    }
}

/// Ordered column table for one layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceSchema {
    variant: SchemaVariant,
    columns: &'static [ColumnSpec],
}

impl TraceSchema {
    pub fn new(variant: SchemaVariant) -> Self {
        Self {
            variant,
            columns: variant.columns(),
        }
    }

    pub fn variant(&self) -> SchemaVariant {
        self.variant
    }

    pub fn columns(&self) -> &'static [ColumnSpec] {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column(&self, idx: usize) -> Option<&ColumnSpec> {
        self.columns.get(idx)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_counts() {
        assert_eq!(SchemaVariant::A.schema().len(), 23);
        assert_eq!(SchemaVariant::B.schema().len(), 14);
    }

    #[test]
    fn grouping_columns_present_in_both() {
        for variant in [SchemaVariant::A, SchemaVariant::B] {
            let schema = variant.schema();
            for name in ["query_id", "subquery_id", "level", "rel_id", "rel_name"] {
                assert!(schema.has_column(name), "{variant} lacks {name}");
            }
        }
    }

    #[test]
    fn only_variant_a_has_alias() {
        assert!(SchemaVariant::A.schema().has_column("rel_alias"));
        assert!(!SchemaVariant::B.schema().has_column("rel_alias"));
    }

    #[test]
    fn rows_kind_differs_between_variants() {
        let a = SchemaVariant::A.schema();
        let b = SchemaVariant::B.schema();
        assert_eq!(a.column(a.index_of("rows").unwrap()).unwrap().kind, Int);
        assert_eq!(b.column(b.index_of("rows").unwrap()).unwrap().kind, Float);
    }

    #[test]
    fn defaults_for_level_and_subquery() {
        let a = SchemaVariant::A.schema();
        let level = a.column(a.index_of("level").unwrap()).unwrap();
        assert_eq!(level.fallback, Fallback::Int(0));
        let sub = a.column(a.index_of("subquery_id").unwrap()).unwrap();
        assert_eq!(sub.fallback, Fallback::Int(1));
    }

    #[test]
    fn detect_by_width() {
        assert_eq!(SchemaVariant::detect(23), SchemaVariant::A);
        assert_eq!(SchemaVariant::detect(20), SchemaVariant::A);
        assert_eq!(SchemaVariant::detect(14), SchemaVariant::B);
        assert_eq!(SchemaVariant::detect(3), SchemaVariant::B);
    }

    #[test]
    fn parse_variant_names() {
        assert_eq!("A".parse::<SchemaVariant>().unwrap(), SchemaVariant::A);
        assert_eq!("compact".parse::<SchemaVariant>().unwrap(), SchemaVariant::B);
        assert!("c".parse::<SchemaVariant>().is_err());
    }
}
