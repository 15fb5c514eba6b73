use session_assertions::{
    AuthUser, HelperConfig, MemoryCookieJar, MemorySession, MemoryTokenStorage, SessionHelper,
    TestUser,
};

use super::mock_server::SharedStore;

/// Application-side user type, as a real app would pass to the helper
#[derive(Debug, Clone)]
pub struct AppUser {
    pub email: String,
    pub is_admin: bool,
}

impl AppUser {
    pub fn new(email: &str, is_admin: bool) -> Self {
        Self {
            email: email.to_string(),
            is_admin,
        }
    }
}

impl AuthUser for AppUser {
    fn identifier(&self) -> &str {
        &self.email
    }

    fn roles(&self) -> Vec<String> {
        let mut roles = vec!["ROLE_USER".to_string()];
        if self.is_admin {
            roles.push("ROLE_ADMIN".to_string());
        }
        roles
    }
}

pub fn regular_user() -> TestUser {
    TestUser::new("user@example.com")
}

pub fn admin_user() -> AppUser {
    AppUser::new("admin@example.com", true)
}

pub type SharedHelper = SessionHelper<MemorySession<SharedStore>, MemoryCookieJar>;

/// Helper whose session is persisted into `store`, with token storage attached
pub fn helper_with_store(store: &SharedStore, guard: bool) -> SharedHelper {
    let session = MemorySession::with_store(store.clone()).expect("Failed to create session");
    SessionHelper::new(session, MemoryCookieJar::new(), HelperConfig::new(guard))
        .with_token_storage(MemoryTokenStorage::new())
}
