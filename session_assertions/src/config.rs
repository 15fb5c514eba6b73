//! Central configuration for the session-assertions crate

use std::path::Path;
use std::sync::LazyLock;

/// Name of the session cookie issued by mock session storage
pub const MOCK_SESSION_NAME: &str = "MOCKSESSID";

/// Name of the persistent login cookie
pub const REMEMBER_ME_COOKIE_NAME: &str = "REMEMBERME";

/// Prefix of the session attribute holding a serialized authentication token
pub const SECURITY_ATTRIBUTE_PREFIX: &str = "_security_";

/// Whether `login` builds guard tokens instead of username/password tokens.
/// Default: false
pub static GUARD_TOKENS: LazyLock<bool> = LazyLock::new(read_guard);

/// Firewall used by `login` when the caller does not name one.
/// Default: "main"
pub static DEFAULT_FIREWALL: LazyLock<String> = LazyLock::new(read_firewall);

/// Name given to newly created in-memory sessions.
/// Default: "MOCKSESSID"
pub static SESSION_NAME: LazyLock<String> = LazyLock::new(|| {
    std::env::var("SESSION_ASSERT_SESSION_NAME").unwrap_or_else(|_| MOCK_SESSION_NAME.to_string())
});

/// Random bytes behind each generated session id.
/// Default: 32
pub static SESSION_ID_BYTES: LazyLock<usize> = LazyLock::new(|| {
    parse_session_id_bytes(std::env::var("SESSION_ASSERT_SESSION_ID_BYTES").ok().as_deref())
});

fn read_guard() -> bool {
    parse_bool(std::env::var("SESSION_ASSERT_GUARD").ok().as_deref())
}

fn read_firewall() -> String {
    parse_firewall(std::env::var("SESSION_ASSERT_FIREWALL").ok().as_deref())
}

fn parse_bool(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}

fn parse_firewall(value: Option<&str>) -> String {
    value.unwrap_or("main").to_string()
}

/// Zero and unparsable values fall back to 32
fn parse_session_id_bytes(value: Option<&str>) -> usize {
    value
        .and_then(|s| s.trim().parse().ok())
        .filter(|n| *n > 0)
        .unwrap_or(32)
}

/// Options controlling how the helper simulates a login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperConfig {
    /// Build guard tokens instead of username/password tokens
    pub guard: bool,
    /// Firewall used when `login` is called without one
    pub default_firewall: String,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            guard: *GUARD_TOKENS,
            default_firewall: DEFAULT_FIREWALL.clone(),
        }
    }
}

impl HelperConfig {
    pub fn new(guard: bool) -> Self {
        Self {
            guard,
            default_firewall: "main".to_string(),
        }
    }

    pub fn with_default_firewall(mut self, firewall: impl Into<String>) -> Self {
        self.default_firewall = firewall.into();
        self
    }

    /// Reads the configuration from the process environment, without the
    /// process-wide caching of the statics above.
    pub fn from_env() -> Self {
        Self {
            guard: read_guard(),
            default_firewall: read_firewall(),
        }
    }

    /// Loads `path` as a dotenv file, then reads the environment.
    /// Variables already set in the environment win over the file.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, dotenvy::Error> {
        dotenvy::from_filename(path)?;
        Ok(Self::from_env())
    }
}
