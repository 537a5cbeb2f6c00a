//! Error types for the UI state layer.
//!
//! Backend failures cross the bridge as a serialized `{code, description}`
//! pair; local failures get their own enum and are mapped onto the same
//! shape before they reach the alert queue.

use serde::{Deserialize, Serialize};

pub type Result<T, E = UiError> = core::result::Result<T, E>;

/// Failures originating in this layer rather than the backend.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("Metadata error: \"{0}\"")]
    Metadata(String),
    #[error("Cache error: \"{0}\"")]
    Cache(String),
    #[error("Logging error: \"{0}\"")]
    Logging(String),
}

impl UiError {
    /// Numeric code carried into the alert message. Codes 0-15 belong to the
    /// backend's error taxonomy; local codes start above that range, except
    /// `Metadata` which shares the backend's metadata code.
    #[must_use]
    pub const fn error_code(&self) -> i32 {
        match self {
            UiError::Metadata(_) => 0,
            UiError::Cache(_) => 16,
            UiError::Logging(_) => 17,
        }
    }
}

/// Structured error reported by the backend over the bridge.
///
/// The display form is exactly the user-facing alert text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("Error {code}: {description}")]
pub struct BridgeError {
    pub code: i32,
    pub description: String,
}

impl BridgeError {
    pub fn new(code: i32, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
        }
    }
}

impl From<UiError> for BridgeError {
    fn from(err: UiError) -> Self {
        Self {
            code: err.error_code(),
            description: err.to_string(),
        }
    }
}
