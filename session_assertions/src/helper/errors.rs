//! Error types for the session helper

use thiserror::Error;

use crate::assertion::AssertionFailure;
use crate::cookie::CookieError;
use crate::session::SessionError;
use crate::token::TokenError;

/// Errors raised by helper operations other than plain assertions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HelperError {
    /// A session assertion did not hold
    #[error(transparent)]
    Assertion(#[from] AssertionFailure),

    /// Error from the session collaborator
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Error from the cookie jar
    #[error("Cookie error: {0}")]
    Cookie(#[from] CookieError),

    /// Error building or decoding a token
    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}
