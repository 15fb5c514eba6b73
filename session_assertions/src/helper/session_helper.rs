use serde_json::Value;

use crate::assertion::{self, AssertionFailure, SessionBinding};
use crate::config::{
    HelperConfig, MOCK_SESSION_NAME, REMEMBER_ME_COOKIE_NAME, SECURITY_ATTRIBUTE_PREFIX,
};
use crate::cookie::{Cookie, CookieJar};
use crate::helper::errors::HelperError;
use crate::session::SessionHandle;
use crate::token::{
    AuthToken, AuthUser, JsonTokenSerializer, TokenError, TokenSerializer, TokenStorage,
};
use crate::utils::{base64url_decode, base64url_encode};

/// Session attribute under which the token of a firewall context is stored
pub fn security_attribute(firewall_context: &str) -> String {
    format!("{SECURITY_ATTRIBUTE_PREFIX}{firewall_context}")
}

/// Drives login, logout and session assertions for one simulated browser
///
/// The helper owns the session handle and cookie jar of the browser for the
/// duration of a test. Token storage is optional; without it logout skips
/// clearing the current token.
pub struct SessionHelper<S: SessionHandle, J: CookieJar> {
    session: S,
    cookie_jar: J,
    token_storage: Option<Box<dyn TokenStorage>>,
    serializer: Box<dyn TokenSerializer>,
    config: HelperConfig,
}

impl<S: SessionHandle, J: CookieJar> SessionHelper<S, J> {
    /// Creates a helper with the default JSON token serializer and no token storage
    pub fn new(session: S, cookie_jar: J, config: HelperConfig) -> Self {
        Self {
            session,
            cookie_jar,
            token_storage: None,
            serializer: Box::new(JsonTokenSerializer),
            config,
        }
    }

    /// Sets the storage whose current token is cleared on logout
    pub fn with_token_storage(mut self, storage: impl TokenStorage + 'static) -> Self {
        self.token_storage = Some(Box::new(storage));
        self
    }

    /// Replaces the serializer used to encode tokens into the session
    pub fn with_serializer(mut self, serializer: impl TokenSerializer + 'static) -> Self {
        self.serializer = Box::new(serializer);
        self
    }

    /// The session under test
    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    /// The simulated browser's cookie jar
    pub fn cookie_jar(&self) -> &J {
        &self.cookie_jar
    }

    pub fn cookie_jar_mut(&mut self) -> &mut J {
        &mut self.cookie_jar
    }

    /// Token storage, if one was attached
    pub fn token_storage(&self) -> Option<&dyn TokenStorage> {
        self.token_storage.as_deref()
    }

    pub fn token_storage_mut(&mut self) -> Option<&mut (dyn TokenStorage + 'static)> {
        self.token_storage.as_deref_mut()
    }

    pub fn config(&self) -> &HelperConfig {
        &self.config
    }

    /// Consumes the helper, returning the session and cookie jar
    pub fn into_parts(self) -> (S, J) {
        (self.session, self.cookie_jar)
    }

    /// Logs `user` in without going through a login form.
    ///
    /// The token is stored under `_security_<firewall_context>`, or
    /// `_security_<firewall_name>` when no context is given. A missing
    /// firewall name falls back to the configured default.
    #[tracing::instrument(skip(self, user), fields(user = user.identifier()))]
    pub fn login<U: AuthUser + ?Sized>(
        &mut self,
        user: &U,
        firewall_name: Option<&str>,
        firewall_context: Option<&str>,
    ) -> Result<(), HelperError> {
        let firewall_name = firewall_name.unwrap_or(&self.config.default_firewall);
        let attribute = security_attribute(firewall_context.unwrap_or(firewall_name));

        let token = AuthToken::for_user(user, firewall_name, self.config.guard);
        let serialized = self.serializer.serialize(&token)?;

        self.session
            .set(&attribute, Value::String(base64url_encode(&serialized)));
        self.session.save()?;

        let cookie = Cookie::new(self.session.name(), self.session.id());
        tracing::debug!("Setting session cookie {}", cookie.name);
        self.cookie_jar.set(cookie);

        tracing::info!("Logged in {} under {}", user.identifier(), attribute);
        Ok(())
    }

    /// Logs the current user out and drops the session cookies.
    ///
    /// Safe to call repeatedly.
    #[tracing::instrument(skip(self))]
    pub fn logout(&mut self) -> Result<(), HelperError> {
        if let Some(storage) = self.token_storage.as_mut() {
            storage.set_token(None);
        }

        // Invalidation may rename the session, so the cookie name is read first.
        let session_name = self.session.name().to_string();
        self.session.invalidate()?;

        for cookie in self.cookie_jar.all() {
            let name = cookie.name.as_str();
            if name == MOCK_SESSION_NAME || name == REMEMBER_ME_COOKIE_NAME || name == session_name
            {
                tracing::debug!("Expiring cookie {}", name);
                self.cookie_jar.expire(name);
            }
        }
        self.cookie_jar.flush_expired_cookies();

        tracing::info!("Logged out of session {}", session_name);
        Ok(())
    }

    /// Asserts on the session under test; see [`assertion::assert_session_has`]
    pub fn assert_session_has(
        &self,
        attribute: &str,
        value: Option<&Value>,
    ) -> Result<(), AssertionFailure> {
        assertion::assert_session_has(&self.session, attribute, value)
    }

    /// See [`assertion::assert_session_does_not_have`]
    pub fn assert_session_does_not_have(
        &self,
        attribute: &str,
        value: Option<&Value>,
    ) -> Result<(), AssertionFailure> {
        assertion::assert_session_does_not_have(&self.session, attribute, value)
    }

    /// Checks each binding in order and returns the first failure
    pub fn assert_session_has_values(
        &self,
        bindings: &[SessionBinding],
    ) -> Result<(), AssertionFailure> {
        assertion::assert_session_has_values(&self.session, bindings)
    }

    /// Negative counterpart of [`Self::assert_session_has_values`]
    pub fn assert_session_does_not_have_values(
        &self,
        bindings: &[SessionBinding],
    ) -> Result<(), AssertionFailure> {
        assertion::assert_session_does_not_have_values(&self.session, bindings)
    }

    /// Returns the raw value of a session attribute, or `None` when absent
    pub fn grab_from_session(&self, attribute: &str) -> Option<&Value> {
        self.session.get(attribute)
    }

    /// Whether a token is stored for `firewall_context`.
    ///
    /// Only presence is checked; the token is not decoded.
    pub fn is_logged_in(&self, firewall_context: &str) -> bool {
        self.session.has(&security_attribute(firewall_context))
    }

    /// Decodes the token stored for a firewall context, if any.
    pub fn grab_token(&self, firewall_context: &str) -> Result<Option<AuthToken>, HelperError> {
        let attribute = security_attribute(firewall_context);
        let Some(stored) = self.session.get(&attribute) else {
            return Ok(None);
        };

        let Value::String(encoded) = stored else {
            tracing::warn!("Attribute {} does not hold an encoded token", attribute);
            return Err(TokenError::InvalidAttribute.into());
        };

        let bytes = base64url_decode(encoded).map_err(TokenError::from)?;
        Ok(Some(self.serializer.deserialize(&bytes)?))
    }
}
