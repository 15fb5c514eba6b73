//! session-assertions - Session assertion helpers for browser-emulation tests
//!
//! This crate lets a test log a user in without a login form, log them out,
//! and assert on session attributes between simulated requests. The session
//! handle, cookie jar, token storage and token serializer are injected, and
//! in-memory implementations of each are provided.

mod assertion;
mod config;
mod cookie;
mod helper;
mod session;
mod token;
mod utils;

pub use assertion::{
    AssertionFailure, SessionBinding, assert_session_does_not_have,
    assert_session_does_not_have_values, assert_session_has, assert_session_has_values,
};

pub use config::{
    DEFAULT_FIREWALL, GUARD_TOKENS, HelperConfig, MOCK_SESSION_NAME, REMEMBER_ME_COOKIE_NAME,
    SECURITY_ATTRIBUTE_PREFIX, SESSION_ID_BYTES, SESSION_NAME,
};

pub use cookie::{Cookie, CookieError, CookieJar, MemoryCookieJar};

pub use helper::{HelperError, SessionHelper, security_attribute};

pub use session::{
    CacheData, InMemorySessionStore, MemorySession, SessionError, SessionHandle, SessionStore,
};

pub use token::{
    AuthToken, AuthUser, GuardToken, JsonTokenSerializer, MemoryTokenStorage, TestUser,
    TokenError, TokenSerializer, TokenStorage, TokenUser, UsernamePasswordToken,
};

pub use utils::{UtilError, gen_random_string};
