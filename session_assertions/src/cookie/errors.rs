use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CookieError {
    #[error("Cookie parse error: {0}")]
    Parse(String),

    #[error("Header error: {0}")]
    HeaderError(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<url::ParseError> for CookieError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}
