//! Readers that turn trace files into path records.

pub mod tsv;
