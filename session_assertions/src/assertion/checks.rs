use serde_json::Value;

use crate::assertion::errors::AssertionFailure;
use crate::assertion::types::SessionBinding;
use crate::session::SessionHandle;

/// Asserts that `attribute` is present, or that it holds `value` when one is given.
///
/// With a value only equality is checked: an absent attribute fails as `NotEqual`.
pub fn assert_session_has<S>(
    session: &S,
    attribute: &str,
    value: Option<&Value>,
) -> Result<(), AssertionFailure>
where
    S: SessionHandle + ?Sized,
{
    match value {
        None => {
            if !session.has(attribute) {
                return Err(AssertionFailure::MissingAttribute(attribute.to_string()));
            }
        }
        Some(expected) => {
            let actual = session.get(attribute);
            if actual != Some(expected) {
                return Err(AssertionFailure::NotEqual {
                    attribute: attribute.to_string(),
                    expected: expected.clone(),
                    actual: actual.cloned(),
                });
            }
        }
    }
    Ok(())
}

/// Asserts that `attribute` is absent, or that it does not hold `value` when one is given.
///
/// With a value, an attribute that is absent or holds something else passes.
pub fn assert_session_does_not_have<S>(
    session: &S,
    attribute: &str,
    value: Option<&Value>,
) -> Result<(), AssertionFailure>
where
    S: SessionHandle + ?Sized,
{
    match value {
        None => {
            if session.has(attribute) {
                return Err(AssertionFailure::UnexpectedAttribute(attribute.to_string()));
            }
        }
        Some(unexpected) => {
            if session.get(attribute) == Some(unexpected) {
                return Err(AssertionFailure::Equal {
                    attribute: attribute.to_string(),
                    value: unexpected.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Runs `assert_session_has` for each binding in order, stopping at the first failure.
pub fn assert_session_has_values<S>(
    session: &S,
    bindings: &[SessionBinding],
) -> Result<(), AssertionFailure>
where
    S: SessionHandle + ?Sized,
{
    bindings.iter().try_for_each(|binding| {
        assert_session_has(session, binding.attribute(), binding.expected())
    })
}

/// Runs `assert_session_does_not_have` for each binding in order, stopping at the first failure.
pub fn assert_session_does_not_have_values<S>(
    session: &S,
    bindings: &[SessionBinding],
) -> Result<(), AssertionFailure>
where
    S: SessionHandle + ?Sized,
{
    bindings.iter().try_for_each(|binding| {
        assert_session_does_not_have(session, binding.attribute(), binding.expected())
    })
}
