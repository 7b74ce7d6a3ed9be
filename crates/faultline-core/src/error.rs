//! Errors raised while reading or writing serialized faults.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SerializeError {
    /// The document is not valid JSON or not shaped like a fault record.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// One line of a JSON lines stream failed to parse.
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
