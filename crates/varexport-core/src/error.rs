//! Error types for the export API boundary.
//!
//! Rendering itself never fails. Errors only arise when a caller hands in an
//! invalid depth bound or JSON text that does not parse.

use thiserror::Error;

/// Errors that can occur before a value reaches the exporter.
#[derive(Error, Debug)]
pub enum ExportError {
    /// A depth bound below the `-1` "unbounded" sentinel.
    #[error("invalid max depth {0}: expected -1 (unbounded) or a non-negative integer")]
    InvalidDepth(i64),

    /// A depth bound given as text that is neither `unbounded` nor an integer.
    #[error("invalid max depth '{0}': expected 'unbounded', -1 or a non-negative integer")]
    UnparsableDepth(String),

    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Convenience alias used throughout varexport-core.
pub type Result<T> = std::result::Result<T, ExportError>;
