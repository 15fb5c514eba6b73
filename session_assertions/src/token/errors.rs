use thiserror::Error;

use crate::utils::UtilError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TokenError {
    #[error("Token serialization error: {0}")]
    Serialize(String),

    #[error("Token deserialization error: {0}")]
    Deserialize(String),

    #[error("Stored token is not a string")]
    InvalidAttribute,

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}
