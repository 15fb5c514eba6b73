use serde_json::Value;
use thiserror::Error;

/// A failed session assertion, carrying the diagnostic shown by the test runner
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AssertionFailure {
    #[error("No session attribute with name '{0}'")]
    MissingAttribute(String),

    #[error("Session attribute with name '{0}' does exist")]
    UnexpectedAttribute(String),

    #[error(
        "Session attribute '{attribute}' was expected to equal {expected}, got {}",
        describe(.actual)
    )]
    NotEqual {
        attribute: String,
        expected: Value,
        /// `None` when the attribute is absent
        actual: Option<Value>,
    },

    #[error("Session attribute '{attribute}' was expected not to equal {value}")]
    Equal { attribute: String, value: Value },
}

fn describe(actual: &Option<Value>) -> String {
    match actual {
        Some(value) => value.to_string(),
        None => "no value (attribute is absent)".to_string(),
    }
}
