use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use reqwest::Url;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::HeaderValue;

/// Cookie store that can be emptied.
///
/// `Jar` forgets a cookie only when an expiring cookie arrives for the same
/// domain and path. Swapping the inner jar drops every cookie on any path.
#[derive(Debug, Default)]
pub(crate) struct SessionJar {
    inner: RwLock<Jar>,
}

impl SessionJar {
    /// Drop all cookies, then store `cookie` for `url`.
    pub(crate) fn replace(&self, cookie: &str, url: &Url) {
        let jar = Jar::default();
        jar.add_cookie_str(cookie, url);
        *self.write() = jar;
    }

    /// Drop all cookies.
    pub(crate) fn clear(&self) {
        *self.write() = Jar::default();
    }

    fn read(&self) -> RwLockReadGuard<'_, Jar> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Jar> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CookieStore for SessionJar {
    fn set_cookies(&self, cookie_headers: &mut dyn Iterator<Item = &HeaderValue>, url: &Url) {
        self.read().set_cookies(cookie_headers, url);
    }

    fn cookies(&self, url: &Url) -> Option<HeaderValue> {
        self.read().cookies(url)
    }
}
