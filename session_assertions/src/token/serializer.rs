use crate::token::errors::TokenError;
use crate::token::types::AuthToken;

/// Turns tokens into the bytes stored in the session, and back
pub trait TokenSerializer {
    fn serialize(&self, token: &AuthToken) -> Result<Vec<u8>, TokenError>;

    fn deserialize(&self, bytes: &[u8]) -> Result<AuthToken, TokenError>;
}

/// Serializes tokens as JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTokenSerializer;

impl TokenSerializer for JsonTokenSerializer {
    fn serialize(&self, token: &AuthToken) -> Result<Vec<u8>, TokenError> {
        serde_json::to_vec(token).map_err(|e| TokenError::Serialize(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<AuthToken, TokenError> {
        serde_json::from_slice(bytes).map_err(|e| TokenError::Deserialize(e.to_string()))
    }
}
