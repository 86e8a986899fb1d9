use thiserror::Error;

#[derive(Debug, Error)]
pub enum GroupError {
    #[error("document shape: expected {expected} at {at}")]
    Shape { expected: &'static str, at: String },

    #[error("path under {at} has {field} = {found}, bucket key is {key}")]
    KeyMismatch {
        at: String,
        field: &'static str,
        key: i64,
        found: String,
    },

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
