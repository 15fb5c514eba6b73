use chrono::{DateTime, Duration, Utc};
use url::Url;

use crate::cookie::errors::CookieError;

const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// A cookie held by the simulated browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    /// `None` for host-only cookies
    pub domain: Option<String>,
    pub path: String,
    /// `None` for session cookies, which never expire inside a test
    pub expires: Option<DateTime<Utc>>,
    pub secure: bool,
    pub http_only: bool,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: None,
            path: "/".to_string(),
            expires: None,
            secure: false,
            http_only: false,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(normalize_domain(&domain.into()));
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_expires(mut self, expires: DateTime<Utc>) -> Self {
        self.expires = Some(expires);
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires.is_some_and(|expires| expires <= now)
    }

    /// Marks the cookie as expired without removing it.
    pub fn expire(&mut self) {
        self.expires = Some(DateTime::<Utc>::UNIX_EPOCH);
    }

    /// Whether a jar entry is the same cookie slot as `other`
    pub(crate) fn same_slot(&self, other: &Cookie) -> bool {
        self.name == other.name && self.path == other.path && self.domain == other.domain
    }

    /// Whether a request to `url` would carry this cookie
    pub fn matches_url(&self, url: &Url) -> bool {
        if let Some(domain) = &self.domain {
            let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
            if host != *domain && !host.ends_with(&format!(".{domain}")) {
                return false;
            }
        }

        if !path_matches(url.path(), &self.path) {
            return false;
        }

        !self.secure || url.scheme() == "https"
    }

    /// Renders the cookie as a `Set-Cookie` header value.
    pub fn to_set_cookie_string(&self) -> String {
        let mut cookie = format!("{}={}; Path={}", self.name, self.value, self.path);
        if let Some(domain) = &self.domain {
            cookie.push_str(&format!("; Domain={domain}"));
        }
        if let Some(expires) = &self.expires {
            cookie.push_str(&format!("; Expires={}", expires.format(HTTP_DATE_FORMAT)));
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        cookie
    }

    /// Parses a `Set-Cookie` header value.
    ///
    /// Unknown attributes and unparsable `Expires` dates are ignored.
    /// `Max-Age` wins over `Expires`; a non-positive `Max-Age` yields an expired cookie.
    pub fn parse_set_cookie(header: &str) -> Result<Self, CookieError> {
        let mut parts = header.split(';').map(str::trim);

        let pair = parts.next().unwrap_or_default();
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| CookieError::Parse(format!("Missing '=' in cookie pair: {pair}")))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(CookieError::Parse("Cookie name is empty".to_string()));
        }

        let mut cookie = Cookie::new(name, value.trim().trim_matches('"'));
        let mut max_age: Option<i64> = None;

        for attribute in parts.filter(|p| !p.is_empty()) {
            let (key, val) = match attribute.split_once('=') {
                Some((k, v)) => (k.trim(), v.trim()),
                None => (attribute, ""),
            };

            match key.to_ascii_lowercase().as_str() {
                "path" if val.starts_with('/') => cookie.path = val.to_string(),
                "domain" if !val.is_empty() => cookie.domain = Some(normalize_domain(val)),
                "expires" => match DateTime::parse_from_rfc2822(val) {
                    Ok(expires) => cookie.expires = Some(expires.with_timezone(&Utc)),
                    Err(e) => tracing::debug!("Ignoring unparsable Expires '{val}': {e}"),
                },
                "max-age" => match val.parse::<i64>() {
                    Ok(seconds) => max_age = Some(seconds),
                    Err(e) => tracing::debug!("Ignoring unparsable Max-Age '{val}': {e}"),
                },
                "secure" => cookie.secure = true,
                "httponly" => cookie.http_only = true,
                _ => {}
            }
        }

        if let Some(seconds) = max_age {
            cookie.expires = Some(if seconds <= 0 {
                DateTime::<Utc>::UNIX_EPOCH
            } else {
                // Clamped to the latest representable time
                Duration::try_seconds(seconds)
                    .and_then(|delta| Utc::now().checked_add_signed(delta))
                    .unwrap_or(DateTime::<Utc>::MAX_UTC)
            });
        }

        Ok(cookie)
    }
}

/// Path-match of RFC 6265 section 5.1.4
fn path_matches(request_path: &str, cookie_path: &str) -> bool {
    if request_path == cookie_path {
        return true;
    }
    request_path.starts_with(cookie_path)
        && (cookie_path.ends_with('/')
            || request_path[cookie_path.len()..].starts_with('/'))
}

fn normalize_domain(domain: &str) -> String {
    domain.trim_start_matches('.').to_ascii_lowercase()
}
