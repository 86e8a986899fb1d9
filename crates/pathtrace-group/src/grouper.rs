//! Left-to-right fold of path records into a `TraceDocument`.

use pathtrace_core::PathRecord;

use crate::document::{RelationBucket, TraceDocument};

/// Incremental grouper. Buckets are created on first sight of a key; later
/// records only append to `paths`.
#[derive(Debug, Default)]
pub struct Grouper {
    doc: TraceDocument,
    records: usize,
}

impl Grouper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: PathRecord) {
        let relations = &mut self
            .doc
            .queries
            .entry(record.query_id())
            .or_default()
            .subqueries
            .entry(record.subquery_id())
            .or_default()
            .levels
            .entry(record.level())
            .or_default()
            .relations;
        relations
            .entry(record.rel_id())
            .or_insert_with(|| RelationBucket::new(&record))
            .paths
            .push(record);
        self.records += 1;
    }

    /// Records pushed so far.
    pub fn len(&self) -> usize {
        self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records == 0
    }

    pub fn finish(self) -> TraceDocument {
        self.doc
    }
}

impl Extend<PathRecord> for Grouper {
    fn extend<I: IntoIterator<Item = PathRecord>>(&mut self, iter: I) {
        for record in iter {
            self.push(record);
        }
    }
}

/// Group a whole sequence of records at once.
pub fn group(records: impl IntoIterator<Item = PathRecord>) -> TraceDocument {
    let mut grouper = Grouper::new();
    grouper.extend(records);
    grouper.finish()
}
