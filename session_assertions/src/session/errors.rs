use thiserror::Error;

use crate::utils::UtilError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Session not found: {0}")]
    NotFound(String),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(err.to_string())
    }
}
