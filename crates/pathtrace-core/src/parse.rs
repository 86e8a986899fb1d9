//! Row parser: raw text fields + column table → `PathRecord`.
//!
//! Positional: field `i` belongs to column `i`. Missing trailing fields read
//! as the null sentinel, extra trailing fields are ignored. Any value that is
//! present but does not coerce rejects the whole row.

use crate::error::RowError;
use crate::record::PathRecord;
use crate::schema::{ColumnKind, ColumnSpec, Fallback, TraceSchema};
use crate::types::FieldValue;

/// Text marking "no value" in planner trace dumps.
pub const DEFAULT_NULL_SENTINEL: &str = "\\N";

/// Parser bound to one layout and one null sentinel.
#[derive(Debug, Clone)]
pub struct RowParser {
    schema: TraceSchema,
    null_sentinel: String,
}

impl RowParser {
    pub fn new(schema: TraceSchema) -> Self {
        Self {
            schema,
            null_sentinel: DEFAULT_NULL_SENTINEL.to_string(),
        }
    }

    pub fn with_null_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.null_sentinel = sentinel.into();
        self
    }

    pub fn schema(&self) -> &TraceSchema {
        &self.schema
    }

    pub fn null_sentinel(&self) -> &str {
        &self.null_sentinel
    }

    pub fn parse<S: AsRef<str>>(&self, raw: &[S]) -> Result<PathRecord, RowError> {
        parse_row(raw, &self.schema, &self.null_sentinel)
    }
}

/// Coerce one raw row against `schema`.
pub fn parse_row<S: AsRef<str>>(
    raw: &[S],
    schema: &TraceSchema,
    null_sentinel: &str,
) -> Result<PathRecord, RowError> {
    let mut values = schema
        .columns()
        .iter()
        .enumerate()
        .map(|(idx, spec)| {
            let text: Option<&str> = raw
                .get(idx)
                .map(|s| s.as_ref())
                .filter(|t| *t != null_sentinel);
            coerce(spec, text)
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (spec, value) in schema.columns().iter().zip(values.iter_mut()) {
        if let Fallback::Int(default) = spec.fallback {
            if value.is_null() {
                *value = FieldValue::Int(default);
            }
        }
    }

    let key = |name: &'static str| -> Result<i64, RowError> {
        schema
            .index_of(name)
            .and_then(|idx| values[idx].as_int())
            .ok_or(RowError::MissingKey(name))
    };
    let query_id = key("query_id")?;
    let subquery_id = key("subquery_id")?;
    let level = key("level")?;
    let rel_id = key("rel_id")?;

    let mut rel_name = format!("rel_{rel_id}");
    for (spec, value) in schema.columns().iter().zip(values.iter_mut()) {
        if spec.fallback != Fallback::RelName {
            continue;
        }
        match value.as_str().filter(|name| !name.is_empty()) {
            Some(name) => rel_name = name.to_string(),
            None => *value = FieldValue::Text(rel_name.clone()),
        }
    }

    Ok(PathRecord::from_parts(
        schema,
        query_id,
        subquery_id,
        level,
        rel_id,
        rel_name,
        values,
    ))
}

fn coerce(spec: &ColumnSpec, text: Option<&str>) -> Result<FieldValue, RowError> {
    match (spec.kind, text) {
        (ColumnKind::IntList, text) => {
            parse_int_list(spec.name, text.unwrap_or_default()).map(FieldValue::IntList)
        }
        (_, None) => Ok(FieldValue::Null),
        (ColumnKind::Int, Some(text)) => match text.trim() {
            "" => Ok(FieldValue::Null),
            t => t.parse::<i64>().map(FieldValue::Int).map_err(|_| RowError::InvalidInt {
                column: spec.name,
                value: text.to_string(),
            }),
        },
        (ColumnKind::Float, Some(text)) => match text.trim() {
            "" => Ok(FieldValue::Null),
            // JSON has no NaN or infinity; serde_json would write them as null.
            t => t
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(FieldValue::Float)
                .ok_or_else(|| RowError::InvalidFloat {
                    column: spec.name,
                    value: text.to_string(),
                }),
        },
        (ColumnKind::Bool, Some(text)) => Ok(FieldValue::Bool(text.trim() == "t")),
        (ColumnKind::Text, Some(text)) => Ok(FieldValue::Text(text.to_string())),
    }
}

/// `{1, 2,3}` → `[1, 2, 3]`; empty braces or empty text → `[]`.
fn parse_int_list(column: &'static str, text: &str) -> Result<Vec<i64>, RowError> {
    text.trim()
        .trim_matches(|c| c == '{' || c == '}')
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<i64>().map_err(|_| RowError::InvalidList {
                column,
                value: item.to_string(),
            })
        })
        .collect()
}
