use http::StatusCode;
use session_assertions::{
    AuthToken, AuthUser, CookieJar, HelperConfig, MemoryCookieJar, MemorySession,
    SessionHandle, SessionHelper,
};

use crate::common::{
    MockServer, SharedStore, admin_user, helper_with_store, init_test_environment,
    regular_user, request_headers,
};

/// Logging in makes later requests from the same browser authenticated
#[test]
fn test_login_authenticates_following_requests() {
    init_test_environment();

    // Given an application and a browser that is not logged in
    let store = SharedStore::new();
    let server = MockServer::new(&store, "main");
    let mut helper = helper_with_store(&store, false);

    let anonymous = request_headers(helper.cookie_jar().request_header().unwrap());
    assert_eq!(server.get_protected(&anonymous), StatusCode::UNAUTHORIZED);

    // When logging a user in
    helper
        .login(&regular_user(), None, None)
        .expect("Failed to log in");

    // Then the session cookie is sent and the protected page is served
    let headers = request_headers(helper.cookie_jar().request_header().unwrap());
    assert_eq!(server.get_protected(&headers), StatusCode::OK);
    assert_eq!(store.len(), 1);
}

/// The session cookie mirrors the session name and id
#[test]
fn test_login_cookie_matches_session() {
    init_test_environment();

    let session = MemorySession::new().expect("Failed to create session");
    let mut helper = SessionHelper::new(session, MemoryCookieJar::new(), HelperConfig::new(false));

    helper
        .login(&regular_user(), Some("main"), None)
        .expect("Failed to log in");

    helper
        .assert_session_has("_security_main", None)
        .expect("Token should be stored under _security_main");

    let name = helper.session().name().to_string();
    let id = helper.session().id().to_string();
    let cookie = helper.cookie_jar().get(&name).expect("Session cookie missing");
    assert_eq!(cookie.value, id);

    let values = helper
        .cookie_jar()
        .all_values("http://localhost/dashboard")
        .expect("Failed to read cookie values");
    assert_eq!(values.get(&name), Some(&id));
}

/// A firewall context overrides the firewall name as the storage key
#[test]
fn test_login_with_firewall_context() {
    init_test_environment();

    let store = SharedStore::new();
    let mut helper = helper_with_store(&store, false);

    helper
        .login(&admin_user(), Some("admin"), Some("shared_context"))
        .expect("Failed to log in");

    helper
        .assert_session_has("_security_shared_context", None)
        .expect("Token should be stored under the context key");
    helper
        .assert_session_does_not_have("_security_admin", None)
        .expect("Token should not be stored under the firewall name");

    // A server guarding the context accepts the session; one guarding the name does not
    let headers = request_headers(helper.cookie_jar().request_header().unwrap());
    assert_eq!(
        MockServer::new(&store, "shared_context").get_protected(&headers),
        StatusCode::OK
    );
    assert_eq!(
        MockServer::new(&store, "admin").get_protected(&headers),
        StatusCode::UNAUTHORIZED
    );
}

/// The guard flag decides which token the application will find
#[test]
fn test_login_token_type_follows_guard_flag() {
    init_test_environment();

    let user = admin_user();
    for (guard, expect_guard_token) in [(true, true), (false, false)] {
        let store = SharedStore::new();
        let mut helper = helper_with_store(&store, guard);
        helper.login(&user, None, None).expect("Failed to log in");

        let token = helper
            .grab_token("main")
            .expect("Failed to decode token")
            .expect("Token missing");

        assert_eq!(matches!(token, AuthToken::Guard(_)), expect_guard_token);
        assert_eq!(token.user().identifier, user.identifier());
        assert_eq!(token.roles(), user.roles().as_slice());
        assert_eq!(token.provider_key(), "main");
    }
}

/// Logging in on two firewalls keeps both tokens in one session
#[test]
fn test_login_on_two_firewalls() {
    init_test_environment();

    let store = SharedStore::new();
    let mut helper = helper_with_store(&store, false);

    helper
        .login(&regular_user(), Some("main"), None)
        .expect("Failed to log in on main");
    helper
        .login(&admin_user(), Some("admin"), None)
        .expect("Failed to log in on admin");

    assert!(helper.is_logged_in("main"));
    assert!(helper.is_logged_in("admin"));
    assert_eq!(helper.cookie_jar().all().len(), 1);
}
