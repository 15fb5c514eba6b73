use serde::{Deserialize, Serialize};

/// A user that can be logged in by the helper
pub trait AuthUser {
    /// Unique identifier, usually the login name
    fn identifier(&self) -> &str;

    fn roles(&self) -> Vec<String>;
}

/// Minimal user for tests that have no application user type at hand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestUser {
    pub identifier: String,
    pub roles: Vec<String>,
}

impl TestUser {
    /// Creates a user holding only `ROLE_USER`
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            roles: vec!["ROLE_USER".to_string()],
        }
    }

    pub fn with_roles<I, R>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }
}

impl AuthUser for TestUser {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn roles(&self) -> Vec<String> {
        self.roles.clone()
    }
}

/// Snapshot of the user embedded in a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUser {
    pub identifier: String,
    pub roles: Vec<String>,
}

impl TokenUser {
    pub fn from_user<U: AuthUser + ?Sized>(user: &U) -> Self {
        Self {
            identifier: user.identifier().to_string(),
            roles: user.roles(),
        }
    }
}

/// Token of a user authenticated through a guard authenticator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardToken {
    pub user: TokenUser,
    pub provider_key: String,
    pub roles: Vec<String>,
}

/// Token of a user authenticated with username and password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernamePasswordToken {
    pub user: TokenUser,
    /// Always erased once the user is authenticated
    pub credentials: Option<String>,
    pub provider_key: String,
    pub roles: Vec<String>,
}

/// "User X is authenticated on firewall Y with roles R"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthToken {
    Guard(GuardToken),
    UsernamePassword(UsernamePasswordToken),
}

impl AuthToken {
    /// Builds the token `login` stores: a guard token when `guard` is set,
    /// a username/password token otherwise.
    pub fn for_user<U: AuthUser + ?Sized>(user: &U, firewall_name: &str, guard: bool) -> Self {
        let token_user = TokenUser::from_user(user);
        let roles = token_user.roles.clone();

        if guard {
            AuthToken::Guard(GuardToken {
                user: token_user,
                provider_key: firewall_name.to_string(),
                roles,
            })
        } else {
            AuthToken::UsernamePassword(UsernamePasswordToken {
                user: token_user,
                credentials: None,
                provider_key: firewall_name.to_string(),
                roles,
            })
        }
    }

    pub fn user(&self) -> &TokenUser {
        match self {
            AuthToken::Guard(token) => &token.user,
            AuthToken::UsernamePassword(token) => &token.user,
        }
    }

    pub fn provider_key(&self) -> &str {
        match self {
            AuthToken::Guard(token) => &token.provider_key,
            AuthToken::UsernamePassword(token) => &token.provider_key,
        }
    }

    pub fn roles(&self) -> &[String] {
        match self {
            AuthToken::Guard(token) => &token.roles,
            AuthToken::UsernamePassword(token) => &token.roles,
        }
    }
}
