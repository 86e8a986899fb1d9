//! Synthetic planner trace rows for integration tests.
#![allow(dead_code)]

use std::io::Write;

use pathtrace::SchemaVariant;
use tempfile::NamedTempFile;

/// A variant A row with defaults, then `overrides` applied by column name.
pub fn row_a(overrides: &[(&str, &str)]) -> String {
    let mut fields = vec![
        "1", "1", "0", "5", "1", "SeqScan", "\\N", "0.00", "35.50", "2550", "4", "orders", "o",
        "\\N", "0", "accepted", "\\N", "\\N", "1.01", "\\N", "\\N", "\\N", "\\N",
    ];
    apply(SchemaVariant::A, &mut fields, overrides);
    fields.join("\t")
}

/// A variant B row with defaults, then `overrides` applied by column name.
pub fn row_b(overrides: &[(&str, &str)]) -> String {
    let mut fields = vec![
        "1", "\\N", "1", "5", "1", "SeqScan", "\\N", "0.00", "35.50", "2550.0", "f", "orders",
        "\\N", "0",
    ];
    apply(SchemaVariant::B, &mut fields, overrides);
    fields.join("\t")
}

fn apply<'a>(variant: SchemaVariant, fields: &mut [&'a str], overrides: &[(&str, &'a str)]) {
    let schema = variant.schema();
    for (name, value) in overrides {
        let idx = schema
            .index_of(name)
            .unwrap_or_else(|| panic!("unknown column {name}"));
        fields[idx] = value;
    }
}

/// Write rows (one per line) to a temp file.
pub fn write_trace(rows: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create trace file");
    for row in rows {
        writeln!(file, "{}", row).expect("Failed to write row");
    }
    file.flush().expect("Failed to flush trace file");
    file
}

/// A mixed trace: several queries, subqueries, levels and relations, with
/// rows for the same relation interleaved with others.
pub fn generate_trace(rows: usize) -> Vec<String> {
    (0..rows)
        .map(|i| {
            let qid = (1 + i % 3).to_string();
            let sid = (1 + (i / 3) % 2).to_string();
            let lvl = ((i / 6) % 3).to_string();
            let rid = (1 + i % 5).to_string();
            let path_id = i.to_string();
            let children = format!("{{{},{}}}", i, i + 1);
            let cost = format!("{}.25", i);
            row_a(&[
                ("query_id", qid.as_str()),
                ("subquery_id", sid.as_str()),
                ("level", lvl.as_str()),
                ("rel_id", rid.as_str()),
                ("path_id", path_id.as_str()),
                ("child_paths", children.as_str()),
                ("total_cost", cost.as_str()),
            ])
        })
        .collect()
}
