//! Client environment: the current location plus cookie storage.
//!
//! The bootstrap sequence reads the tenant id, culture and auth token from
//! cookies and derives the tenant name from the current URL. Hosts build a
//! `ClientEnvironment` once and hand it to `PreBootstrap`.

pub mod cookies;

pub use cookies::{CookieJar, CookiePair};

use url::Url;

/// Location and cookie state of the client running the bootstrap.
#[derive(Debug, Clone)]
pub struct ClientEnvironment {
    current_url: Url,
    cookies: CookieJar,
}

impl ClientEnvironment {
    pub fn new(current_url: Url) -> Self {
        Self {
            current_url,
            cookies: CookieJar::new(),
        }
    }

    pub fn with_cookies(mut self, cookies: CookieJar) -> Self {
        self.cookies = cookies;
        self
    }

    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.set(name, value);
        self
    }

    pub fn current_url(&self) -> &Url {
        &self.current_url
    }

    pub fn cookies(&self) -> &CookieJar {
        &self.cookies
    }

    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name)
    }

    /// Tenant id stored in `cookie_name`, if it holds an integer.
    pub fn tenant_id(&self, cookie_name: &str) -> Option<i64> {
        self.cookie(cookie_name)?.trim().parse().ok()
    }
}
