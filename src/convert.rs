//! End-to-end conversion: reader → grouper → JSON writer.

use std::io::{Read, Write};

use pathtrace_core::SchemaVariant;
use pathtrace_group::{group, TraceDocument};
use pathtrace_io::{JsonWriter, RejectedRow, Result, TraceReader};

/// What a conversion did, for the caller to report.
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    pub variant: SchemaVariant,
    pub accepted: usize,
    pub rejected: Vec<RejectedRow>,
}

/// Load all rows and group the accepted ones.
pub fn load_document<R: Read>(
    reader: TraceReader<R>,
) -> Result<(TraceDocument, ConvertSummary)> {
    let report = reader.load()?;
    let summary = ConvertSummary {
        variant: report.variant,
        accepted: report.accepted(),
        rejected: report.rejected,
    };
    Ok((group(report.records), summary))
}

/// Load, group, and write the document as indented JSON to `output`.
pub fn convert<R: Read, W: Write>(reader: TraceReader<R>, output: W) -> Result<ConvertSummary> {
    let (doc, summary) = load_document(reader)?;
    JsonWriter::to_writer(output).write_document(&doc)?;
    Ok(summary)
}
