use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Why a single trace row could not become a path record.
///
/// These are recoverable: the reader logs the row and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("column '{column}': cannot parse {value:?} as an integer")]
    InvalidInt { column: &'static str, value: String },

    #[error("column '{column}': cannot parse {value:?} as a float")]
    InvalidFloat { column: &'static str, value: String },

    #[error("column '{column}': bad list element {value:?}")]
    InvalidList { column: &'static str, value: String },

    #[error("missing grouping key '{0}'")]
    MissingKey(&'static str),
}

impl RowError {
    /// Name of the column that triggered the rejection.
    pub fn column(&self) -> &'static str {
        match self {
            RowError::InvalidInt { column, .. }
            | RowError::InvalidFloat { column, .. }
            | RowError::InvalidList { column, .. } => *column,
            RowError::MissingKey(column) => *column,
        }
    }
}
