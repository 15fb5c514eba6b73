use serde_json::{Value, json};
use session_assertions::{
    AssertionFailure, HelperConfig, HelperError, MemoryCookieJar, MemorySession,
    MemoryTokenStorage, SessionBinding, SessionHandle, SessionHelper, TestUser,
    assert_session_has_values,
};

use crate::common::{init_test_environment, regular_user};

fn helper() -> SessionHelper<MemorySession, MemoryCookieJar> {
    let session = MemorySession::new().expect("Failed to create session");
    SessionHelper::new(session, MemoryCookieJar::new(), HelperConfig::new(false))
}

/// A test step written with `?` stops at the first failing assertion
fn checkout_step(
    helper: &SessionHelper<MemorySession, MemoryCookieJar>,
) -> Result<(), HelperError> {
    helper.assert_session_has("_security_main", None)?;
    helper.assert_session_has("cart", Some(&json!({"items": 2})))?;
    helper.assert_session_does_not_have("coupon", None)?;
    Ok(())
}

#[test]
fn test_assertions_in_a_test_step() {
    init_test_environment();

    let mut helper = helper();
    helper
        .login(&regular_user(), None, None)
        .expect("Failed to log in");

    // Before the cart exists the step fails on the cart check
    let result = checkout_step(&helper);
    assert_eq!(
        result,
        Err(HelperError::Assertion(AssertionFailure::NotEqual {
            attribute: "cart".to_string(),
            expected: json!({"items": 2}),
            actual: None,
        }))
    );

    helper.session_mut().set("cart", json!({"items": 2}));
    assert_eq!(checkout_step(&helper), Ok(()));

    helper.session_mut().set("coupon", json!("SAVE10"));
    let message = checkout_step(&helper).unwrap_err().to_string();
    assert_eq!(message, "Session attribute with name 'coupon' does exist");
}

#[test]
fn test_readme_usage_flow() {
    init_test_environment();

    // Given a helper set up as in the README
    let session = MemorySession::new().expect("Failed to create session");
    let mut helper = SessionHelper::new(session, MemoryCookieJar::new(), HelperConfig::new(false))
        .with_token_storage(MemoryTokenStorage::new());
    helper
        .login(&TestUser::new("alice"), None, None)
        .expect("Failed to log in");
    assert_eq!(helper.assert_session_has("_security_main", None), Ok(()));

    let bindings = [
        SessionBinding::name("_security_main"),
        SessionBinding::value("locale", json!("en")),
    ];

    // When the locale has not been set, the bulk assertion fails on it
    assert!(helper.assert_session_has_values(&bindings).is_err());

    // Then setting it first makes the example pass
    helper.session_mut().set("locale", json!("en"));
    assert_eq!(helper.assert_session_has_values(&bindings), Ok(()));
    assert_eq!(helper.logout(), Ok(()));
}

#[test]
fn test_bulk_assertion_matches_individual_calls() {
    init_test_environment();

    let mut helper = helper();
    helper.session_mut().set("a", json!(true));
    helper.session_mut().set("b", json!("x"));

    let bindings = [SessionBinding::name("a"), SessionBinding::value("b", "x")];
    assert_eq!(helper.assert_session_has_values(&bindings), Ok(()));
    assert_eq!(helper.assert_session_has("a", None), Ok(()));
    assert_eq!(helper.assert_session_has("b", Some(&json!("x"))), Ok(()));

    // The free function works on any session handle
    assert_eq!(assert_session_has_values(helper.session(), &bindings), Ok(()));
}

#[test]
fn test_bulk_assertion_reports_first_failure() {
    init_test_environment();

    let mut helper = helper();
    helper.session_mut().set("b", json!("y"));

    let result = helper.assert_session_has_values(&[
        SessionBinding::value("b", "x"),
        SessionBinding::name("missing"),
    ]);

    assert_eq!(
        result,
        Err(AssertionFailure::NotEqual {
            attribute: "b".to_string(),
            expected: json!("x"),
            actual: Some(json!("y")),
        })
    );
}

#[test]
fn test_does_not_have_value_semantics() {
    init_test_environment();

    let mut helper = helper();
    helper.session_mut().set("k", json!("v"));
    helper.session_mut().set("empty", Value::Null);

    // Different value or absent attribute passes
    assert!(helper.assert_session_does_not_have("k", Some(&json!("w"))).is_ok());
    assert!(helper.assert_session_does_not_have("absent", Some(&json!("v"))).is_ok());
    assert!(helper.assert_session_does_not_have("absent", Some(&Value::Null)).is_ok());

    // Stored value fails, including a stored null
    assert!(helper.assert_session_does_not_have("k", Some(&json!("v"))).is_err());
    assert!(helper.assert_session_does_not_have("empty", Some(&Value::Null)).is_err());

    // Presence check fails for any present attribute
    assert!(helper.assert_session_does_not_have("empty", None).is_err());
}

#[test]
fn test_grab_from_session() {
    init_test_environment();

    let mut helper = helper();
    helper.session_mut().set("locale", json!("fr"));

    assert_eq!(helper.grab_from_session("locale"), Some(&json!("fr")));
    assert_eq!(helper.grab_from_session("missing"), None);
}
