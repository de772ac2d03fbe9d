//! Capabilities the client needs from its host environment
//!
//! In the browser these are backed by `localStorage`, `document.cookie` and
//! `window.location`. [`MemorySession`] keeps everything in memory.

use std::cell::RefCell;
use std::collections::HashMap;

/// Persistent token storage and cookie access
pub trait SessionStore {
    /// Current access token, if any
    fn access_token(&self) -> Option<String>;

    /// Replace the current access token
    fn set_access_token(&self, token: &str);

    /// Read a cookie by name
    fn cookie(&self, name: &str) -> Option<String>;

    /// Drop the cached session (access token and user record)
    fn clear(&self);
}

/// Full-page navigation
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// In-memory session that records every navigation request
#[derive(Debug, Default)]
pub struct MemorySession {
    access_token: RefCell<Option<String>>,
    cookies: RefCell<HashMap<String, String>>,
    navigations: RefCell<Vec<String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_access_token(self, token: impl Into<String>) -> Self {
        *self.access_token.borrow_mut() = Some(token.into());
        self
    }

    pub fn with_cookie(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_cookie(name, value);
        self
    }

    pub fn set_cookie(&self, name: impl Into<String>, value: impl Into<String>) {
        self.cookies.borrow_mut().insert(name.into(), value.into());
    }

    /// Paths passed to [`Navigator::navigate`], oldest first
    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }
}

impl SessionStore for MemorySession {
    fn access_token(&self) -> Option<String> {
        self.access_token.borrow().clone()
    }

    fn set_access_token(&self, token: &str) {
        *self.access_token.borrow_mut() = Some(token.to_string());
    }

    fn cookie(&self, name: &str) -> Option<String> {
        self.cookies.borrow().get(name).cloned()
    }

    fn clear(&self) {
        self.access_token.borrow_mut().take();
    }
}

impl Navigator for MemorySession {
    fn navigate(&self, path: &str) {
        self.navigations.borrow_mut().push(path.to_string());
    }
}
