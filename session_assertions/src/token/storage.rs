use crate::token::types::AuthToken;

/// Holds the token of the request currently being handled
pub trait TokenStorage {
    fn token(&self) -> Option<&AuthToken>;

    fn set_token(&mut self, token: Option<AuthToken>);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStorage {
    token: Option<AuthToken>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    fn set_token(&mut self, token: Option<AuthToken>) {
        self.token = token;
    }
}
