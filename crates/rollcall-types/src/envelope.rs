//! Response envelope the REST backend wraps every payload in.

use serde::{Deserialize, Serialize};

use crate::errors::EnvelopeError;

/// Standard `{ success, message, data }` wrapper.
///
/// Failed responses carry `success: false` and a human-readable `message`;
/// `data` may be absent in either case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Unwrap the envelope into its payload.
    ///
    /// A `success: false` envelope becomes [`EnvelopeError::Rejected`] with the
    /// backend's message; a success envelope with no `data` becomes
    /// [`EnvelopeError::MissingData`].
    pub fn into_result(self) -> Result<T, EnvelopeError> {
        if !self.success {
            return Err(EnvelopeError::Rejected(
                self.message.unwrap_or_else(|| "request rejected".to_string()),
            ));
        }
        self.data.ok_or(EnvelopeError::MissingData)
    }
}
