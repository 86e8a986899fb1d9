//! The grouped trace document.

use std::collections::BTreeMap;

use pathtrace_core::PathRecord;
use serde::Serialize;

/// Root of the output: `{"queries": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TraceDocument {
    pub queries: BTreeMap<i64, QueryBucket>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryBucket {
    pub subqueries: BTreeMap<i64, SubqueryBucket>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubqueryBucket {
    pub levels: BTreeMap<i64, LevelBucket>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LevelBucket {
    pub relations: BTreeMap<i64, RelationBucket>,
}

/// All paths seen for one relation at one level. `name` and `alias` come
/// from the first record that created the bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationBucket {
    pub name: String,
    /// Only layouts with an alias column emit this key; a null alias still
    /// appears as `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<Option<String>>,
    pub paths: Vec<PathRecord>,
}

impl RelationBucket {
    pub fn new(first: &PathRecord) -> Self {
        Self {
            name: first.rel_name().to_string(),
            alias: first.rel_alias().map(|a| a.map(str::to_string)),
            paths: Vec::new(),
        }
    }
}

/// (query_id, subquery_id, level, rel_id)
pub type RelationKey = (i64, i64, i64, i64);

impl TraceDocument {
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Total number of path records across all relations.
    pub fn record_count(&self) -> usize {
        self.relations().map(|(_, rel)| rel.paths.len()).sum()
    }

    /// Every relation bucket with its full key, in key order.
    pub fn relations(&self) -> impl Iterator<Item = (RelationKey, &RelationBucket)> + '_ {
        self.queries.iter().flat_map(|(&qid, query)| {
            query.subqueries.iter().flat_map(move |(&sid, sub)| {
                sub.levels.iter().flat_map(move |(&lvl, level)| {
                    level
                        .relations
                        .iter()
                        .map(move |(&rid, rel)| ((qid, sid, lvl, rid), rel))
                })
            })
        })
    }

    pub fn relation(&self, key: RelationKey) -> Option<&RelationBucket> {
        let (qid, sid, lvl, rid) = key;
        self.queries
            .get(&qid)?
            .subqueries
            .get(&sid)?
            .levels
            .get(&lvl)?
            .relations
            .get(&rid)
    }
}
