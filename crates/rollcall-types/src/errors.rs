//! Error types shared across the client crates.

use thiserror::Error;

/// Failure while unwrapping an [`crate::ApiEnvelope`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    /// Backend answered `success: false` with this message.
    #[error("backend rejected request: {0}")]
    Rejected(String),

    /// Backend answered `success: true` but omitted the payload.
    #[error("backend response missing data")]
    MissingData,
}
