//! Error types for the save codec.

use thiserror::Error;

/// Errors that can occur when encoding a save record.
///
/// Decoding never errors: malformed input degrades to the sentinel record
/// instead, so stale or corrupt files cannot take the frontend down.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The record could not be encoded as JSON.
    #[error("could not encode save data: {0}")]
    Encode(#[from] serde_json::Error),
}
