//! The flat path record: one accepted trace row.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::schema::{SchemaVariant, TraceSchema};
use crate::types::FieldValue;

/// One candidate path considered by the planner, with every column of its
/// layout coerced and defaults applied.
///
/// Grouping keys are always concrete. The full column set is kept in layout
/// order so the record serializes back to the same shape it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct PathRecord {
    variant: SchemaVariant,
    query_id: i64,
    subquery_id: i64,
    level: i64,
    rel_id: i64,
    rel_name: String,
    values: Vec<FieldValue>,
}

impl PathRecord {
    /// Assemble a record from coerced values in layout order. The caller
    /// (the row parser) guarantees keys and defaults are already resolved.
    pub(crate) fn from_parts(
        schema: &TraceSchema,
        query_id: i64,
        subquery_id: i64,
        level: i64,
        rel_id: i64,
        rel_name: String,
        values: Vec<FieldValue>,
    ) -> Self {
        debug_assert_eq!(values.len(), schema.len());
        Self {
            variant: schema.variant(),
            query_id,
            subquery_id,
            level,
            rel_id,
            rel_name,
            values,
        }
    }

    pub fn variant(&self) -> SchemaVariant {
        self.variant
    }

    pub fn query_id(&self) -> i64 {
        self.query_id
    }

    pub fn subquery_id(&self) -> i64 {
        self.subquery_id
    }

    pub fn level(&self) -> i64 {
        self.level
    }

    pub fn rel_id(&self) -> i64 {
        self.rel_id
    }

    pub fn rel_name(&self) -> &str {
        &self.rel_name
    }

    /// `None` when the layout has no alias column, `Some(None)` when the
    /// column is present but null.
    pub fn rel_alias(&self) -> Option<Option<&str>> {
        self.get("rel_alias").map(FieldValue::as_str)
    }

    /// Grouping key: (query, subquery, level, relation).
    pub fn key(&self) -> (i64, i64, i64, i64) {
        (self.query_id, self.subquery_id, self.level, self.rel_id)
    }

    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.variant
            .schema()
            .index_of(column)
            .and_then(|idx| self.values.get(idx))
    }

    /// (column name, value) pairs in layout order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> + '_ {
        self.variant
            .columns()
            .iter()
            .map(|c| c.name)
            .zip(self.values.iter())
    }
}

impl Serialize for PathRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in self.fields() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
