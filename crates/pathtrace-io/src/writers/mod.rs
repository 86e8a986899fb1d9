//! Writers for the grouped document.

pub mod json;
