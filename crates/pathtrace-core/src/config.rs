//! Loader configuration that the reader and binary share.

use serde::{Deserialize, Serialize};

use crate::parse::DEFAULT_NULL_SENTINEL;
use crate::schema::SchemaVariant;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Column layout of the input. `None` detects it from the first row.
    pub variant: Option<SchemaVariant>,

    /// Text that marks an absent field.
    pub null_sentinel: String,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            variant: None,
            null_sentinel: DEFAULT_NULL_SENTINEL.to_string(),
        }
    }
}

impl TraceConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `PATHTRACE_SCHEMA`: `a`, `b`, or `auto`
    /// - `PATHTRACE_NULL_SENTINEL`: null marker text
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`TraceConfig::from_env`] with an injectable lookup, so tests
    /// do not have to mutate the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(s) = lookup("PATHTRACE_SCHEMA") {
            if let Ok(v) = s.parse::<SchemaVariant>() {
                cfg.variant = Some(v);
            }
        }

        if let Some(s) = lookup("PATHTRACE_NULL_SENTINEL") {
            if !s.is_empty() {
                cfg.null_sentinel = s;
            }
        }

        cfg
    }

    pub fn with_variant(mut self, variant: Option<SchemaVariant>) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_null_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.null_sentinel = sentinel.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let cfg = TraceConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg, TraceConfig::default());
        assert_eq!(cfg.null_sentinel, "\\N");
        assert!(cfg.variant.is_none());
    }

    #[test]
    fn env_values_apply() {
        let cfg = TraceConfig::from_lookup(lookup(&[
            ("PATHTRACE_SCHEMA", "b"),
            ("PATHTRACE_NULL_SENTINEL", "NULL"),
        ]));
        assert_eq!(cfg.variant, Some(SchemaVariant::B));
        assert_eq!(cfg.null_sentinel, "NULL");
    }

    #[test]
    fn invalid_env_values_are_ignored() {
        let cfg = TraceConfig::from_lookup(lookup(&[
            ("PATHTRACE_SCHEMA", "auto"),
            ("PATHTRACE_NULL_SENTINEL", ""),
        ]));
        assert_eq!(cfg, TraceConfig::default());
    }
}
