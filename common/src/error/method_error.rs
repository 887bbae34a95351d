use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when a UI-supplied method string is not one of the supported verbs.
#[derive(Debug, Clone, ThisError)]
pub enum MethodError {
    #[error("Unsupported Method Error: {method} {location}")]
    Unsupported {
        method: String,
        location: ErrorLocation,
    },
}

impl MethodError {
    /// The rejected method string, exactly as it was supplied.
    pub fn method(&self) -> &str {
        match self {
            MethodError::Unsupported { method, .. } => method,
        }
    }
}
