//! Turn an emitted document back into its flat list of path objects.
//!
//! Used to check that grouping lost nothing: every path comes back, and each
//! one agrees with the bucket keys it was filed under.

use serde_json::{Map, Value};

use crate::error::GroupError;

/// Walk `queries → subqueries → levels → relations → paths` and collect the
/// path objects. Relations are visited in the document's key order; paths
/// within a relation keep their order.
pub fn flatten_value(doc: &Value) -> Result<Vec<Value>, GroupError> {
    let mut out = Vec::new();
    let queries = child_object(doc, "queries", "$")?;
    for (qid, query) in queries {
        let at = format!("queries.{qid}");
        let subqueries = child_object(query, "subqueries", &at)?;
        for (sid, sub) in subqueries {
            let at = format!("{at}.subqueries.{sid}");
            let levels = child_object(sub, "levels", &at)?;
            for (lvl, level) in levels {
                let at = format!("{at}.levels.{lvl}");
                let relations = child_object(level, "relations", &at)?;
                for (rid, rel) in relations {
                    let at = format!("{at}.relations.{rid}");
                    let paths = rel
                        .get("paths")
                        .and_then(Value::as_array)
                        .ok_or_else(|| shape("array 'paths'", &at))?;
                    for path in paths {
                        check_key(path, "query_id", qid, &at)?;
                        check_key(path, "subquery_id", sid, &at)?;
                        check_key(path, "level", lvl, &at)?;
                        check_key(path, "rel_id", rid, &at)?;
                        out.push(path.clone());
                    }
                }
            }
        }
    }
    Ok(out)
}

/// Parse JSON text and flatten it.
pub fn flatten_str(text: &str) -> Result<Vec<Value>, GroupError> {
    let doc: Value = serde_json::from_str(text)?;
    flatten_value(&doc)
}

fn child_object<'a>(
    parent: &'a Value,
    name: &'static str,
    at: &str,
) -> Result<&'a Map<String, Value>, GroupError> {
    parent
        .get(name)
        .and_then(Value::as_object)
        .ok_or_else(|| shape(name, at))
}

fn shape(expected: &'static str, at: &str) -> GroupError {
    GroupError::Shape {
        expected,
        at: at.to_string(),
    }
}

fn check_key(path: &Value, field: &'static str, key: &str, at: &str) -> Result<(), GroupError> {
    let key: i64 = key.parse().map_err(|_| shape("integer key", at))?;
    match path.get(field).and_then(Value::as_i64) {
        Some(found) if found == key => Ok(()),
        other => Err(GroupError::KeyMismatch {
            at: at.to_string(),
            field,
            key,
            found: other.map_or_else(|| "null".to_string(), |v| v.to_string()),
        }),
    }
}
