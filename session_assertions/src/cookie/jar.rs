use std::collections::HashMap;

use http::HeaderMap;
use http::header::{HeaderValue, SET_COOKIE};
use url::Url;

use crate::cookie::errors::CookieError;
use crate::cookie::types::Cookie;

/// Cookie store of the simulated browser, shared across requests
pub trait CookieJar {
    /// Adds a cookie, replacing the one with the same name, path and domain.
    fn set(&mut self, cookie: Cookie);

    /// First unexpired cookie with the given name
    fn get(&self, name: &str) -> Option<&Cookie>;

    /// Every unexpired cookie
    fn all(&self) -> Vec<Cookie>;

    /// Marks every cookie with the given name as expired.
    /// Expiring a missing or already expired cookie does nothing.
    fn expire(&mut self, name: &str);

    /// Removes expired cookies from the jar.
    fn flush_expired_cookies(&mut self);

    fn clear(&mut self);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryCookieJar {
    cookies: Vec<Cookie>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cookies held, expired ones included
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Stores every `Set-Cookie` header of a response, then drops the expired ones.
    pub fn update_from_response(&mut self, headers: &HeaderMap) -> Result<(), CookieError> {
        for value in headers.get_all(SET_COOKIE) {
            let value = value.to_str().map_err(|e| {
                tracing::error!("Invalid Set-Cookie header: {}", e);
                CookieError::HeaderError("Invalid Set-Cookie header".to_string())
            })?;
            let cookie = Cookie::parse_set_cookie(value)?;
            tracing::debug!("Storing cookie {} from response", cookie.name);
            self.set(cookie);
        }
        self.flush_expired_cookies();
        Ok(())
    }

    /// `Cookie` request header carrying every unexpired cookie, or `None` when there is none.
    pub fn request_header(&self) -> Result<Option<HeaderValue>, CookieError> {
        let pairs: Vec<String> = self
            .all()
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect();
        if pairs.is_empty() {
            return Ok(None);
        }

        HeaderValue::from_str(&pairs.join("; "))
            .map(Some)
            .map_err(|e| CookieError::HeaderError(e.to_string()))
    }

    /// Name to value map of the unexpired cookies a request to `uri` would carry
    pub fn all_values(&self, uri: &str) -> Result<HashMap<String, String>, CookieError> {
        let url = Url::parse(uri)?;
        Ok(self
            .all()
            .into_iter()
            .filter(|c| c.matches_url(&url))
            .map(|c| (c.name, c.value))
            .collect())
    }
}

impl CookieJar for MemoryCookieJar {
    fn set(&mut self, cookie: Cookie) {
        match self.cookies.iter_mut().find(|c| c.same_slot(&cookie)) {
            Some(existing) => *existing = cookie,
            None => self.cookies.push(cookie),
        }
    }

    fn get(&self, name: &str) -> Option<&Cookie> {
        self.cookies
            .iter()
            .find(|c| c.name == name && !c.is_expired())
    }

    fn all(&self) -> Vec<Cookie> {
        self.cookies
            .iter()
            .filter(|c| !c.is_expired())
            .cloned()
            .collect()
    }

    fn expire(&mut self, name: &str) {
        self.cookies
            .iter_mut()
            .filter(|c| c.name == name)
            .for_each(Cookie::expire);
    }

    fn flush_expired_cookies(&mut self) {
        let before = self.cookies.len();
        self.cookies.retain(|c| !c.is_expired());
        let flushed = before - self.cookies.len();
        if flushed > 0 {
            tracing::debug!("Flushed {flushed} expired cookies");
        }
    }

    fn clear(&mut self) {
        self.cookies.clear();
    }
}
