//! Session token storage seam
//!
//! The access token lives in a short-lived, cookie-like scope; the refresh
//! token in a longer-lived local scope. Browser hosts implement `TokenStore`
//! over their own cookie/local-storage primitives; `MemoryTokenStore` covers
//! tests and non-browser hosts.

use std::sync::Mutex;

/// Opaque string storage for the session token pair.
///
/// All operations are synchronous, at-least-once and fire-and-forget; the
/// reducer calls them from inside fulfilled/rejected auth transitions.
pub trait TokenStore: Send + Sync {
    fn access_token(&self) -> Option<String>;
    fn set_access_token(&self, token: &str);
    fn clear_access_token(&self);

    fn refresh_token(&self) -> Option<String>;
    fn set_refresh_token(&self, token: &str);
    fn clear_refresh_token(&self);

    /// Drop both tokens. Used on logout and on session invalidation.
    fn purge(&self) {
        self.clear_access_token();
        self.clear_refresh_token();
    }
}

/// In-memory token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    access: Mutex<Option<String>>,
    refresh: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        self.access.lock().unwrap().clone()
    }

    fn set_access_token(&self, token: &str) {
        *self.access.lock().unwrap() = Some(token.to_string());
    }

    fn clear_access_token(&self) {
        *self.access.lock().unwrap() = None;
    }

    fn refresh_token(&self) -> Option<String> {
        self.refresh.lock().unwrap().clone()
    }

    fn set_refresh_token(&self, token: &str) {
        *self.refresh.lock().unwrap() = Some(token.to_string());
    }

    fn clear_refresh_token(&self) {
        *self.refresh.lock().unwrap() = None;
    }
}
