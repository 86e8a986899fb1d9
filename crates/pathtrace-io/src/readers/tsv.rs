//! Tab-delimited planner trace reader.
//!
//! Input is a headerless dump, one row per line, fields separated by tabs
//! and never quoted. Row width may vary; the row parser pads short rows with
//! nulls and ignores extra fields.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use pathtrace_core::{PathRecord, RowError, RowParser, SchemaVariant, TraceConfig};

use crate::error::{Error, Result};

/// Why a row was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// A field is not valid UTF-8.
    Utf8 { field: usize },
    /// A field failed coercion or a grouping key is missing.
    Row(RowError),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Utf8 { field } => write!(f, "field {field} is not valid UTF-8"),
            RejectReason::Row(e) => fmt::Display::fmt(e, f),
        }
    }
}

/// A dropped row, kept for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based line number in the input.
    pub line: u64,
    pub raw: Vec<String>,
    pub reason: RejectReason,
}

/// Outcome of loading one trace file.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub variant: SchemaVariant,
    pub records: Vec<PathRecord>,
    pub rejected: Vec<RejectedRow>,
}

impl LoadReport {
    pub fn accepted(&self) -> usize {
        self.records.len()
    }

    /// Accepted plus rejected rows.
    pub fn total_rows(&self) -> usize {
        self.records.len() + self.rejected.len()
    }
}

pub struct TraceReader<R: Read> {
    rdr: csv::Reader<R>,
    config: TraceConfig,
}

impl TraceReader<File> {
    pub fn from_path(path: impl AsRef<Path>, config: TraceConfig) -> Result<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(f, config))
    }
}

impl<R: Read> TraceReader<R> {
    pub fn from_reader(reader: R, config: TraceConfig) -> Self {
        let rdr = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(b'\t')
            .quoting(false)
            .flexible(true)
            .from_reader(reader);
        Self { rdr, config }
    }

    /// Read every row. Rows that do not parse are logged and collected in
    /// `rejected`; only IO failures return `Err`.
    ///
    /// Without a configured variant the layout is detected from the widest
    /// row, so a truncated first row cannot pick the narrower layout. Blank
    /// lines are skipped by the CSV reader and never reach the parser.
    pub fn load(mut self) -> Result<LoadReport> {
        let mut rows = Vec::new();
        let mut row = ByteRecord::new();
        while self.rdr.read_byte_record(&mut row)? {
            let line = row.position().map_or(0, |p| p.line());
            rows.push((line, row.clone()));
        }

        let variant = match self.config.variant {
            Some(variant) => variant,
            None => {
                let widest = rows.iter().map(|(_, r)| r.len()).max().unwrap_or(0);
                let variant = if rows.is_empty() {
                    SchemaVariant::A
                } else {
                    SchemaVariant::detect(widest)
                };
                tracing::debug!(%variant, columns = widest, "detected trace layout");
                variant
            }
        };
        let parser = self.parser_for(variant);
        let width = parser.schema().len();

        let mut records = Vec::with_capacity(rows.len());
        let mut rejected = Vec::new();
        for (line, row) in rows {
            if row.len() > width {
                tracing::warn!(
                    line,
                    columns = row.len(),
                    expected = width,
                    %variant,
                    "row wider than layout, extra fields ignored"
                );
            }

            let outcome = match decode(&row) {
                Ok(fields) => parser
                    .parse(fields.as_slice())
                    .map_err(|e| (fields, RejectReason::Row(e))),
                Err(field) => Err((lossy(&row), RejectReason::Utf8 { field })),
            };

            match outcome {
                Ok(record) => records.push(record),
                Err((raw, reason)) => {
                    tracing::warn!(line, row = ?raw, error = %reason, "skipped row");
                    rejected.push(RejectedRow { line, raw, reason });
                }
            }
        }

        Ok(LoadReport {
            variant,
            records,
            rejected,
        })
    }

    fn parser_for(&self, variant: SchemaVariant) -> RowParser {
        RowParser::new(variant.schema()).with_null_sentinel(self.config.null_sentinel.clone())
    }
}

/// Fields as owned text, or the index of the first non-UTF-8 field.
fn decode(row: &ByteRecord) -> std::result::Result<Vec<String>, usize> {
    row.iter()
        .enumerate()
        .map(|(idx, bytes)| {
            std::str::from_utf8(bytes)
                .map(str::to_string)
                .map_err(|_| idx)
        })
        .collect()
}

fn lossy(row: &ByteRecord) -> Vec<String> {
    row.iter()
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .collect()
}
