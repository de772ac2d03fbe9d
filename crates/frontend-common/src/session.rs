//! Login session cached in the browser

use crate::config::AuthConfig;
use crate::cookie;
use crate::error::BrowserError;
use crate::storage::LocalStore;
use quiz_http::StoredUser;
use quiz_http::client::session::{Navigator, SessionStore};

/// Session capabilities backed by `localStorage`, cookies and `window.location`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn access_token(&self) -> Option<String> {
        LocalStore::get_raw(AuthConfig::ACCESS_TOKEN_KEY).filter(|token| !token.is_empty())
    }

    fn set_access_token(&self, token: &str) {
        if let Err(e) = LocalStore::set_raw(AuthConfig::ACCESS_TOKEN_KEY, token) {
            error!(error = %e, "failed to store access token");
        }
    }

    fn cookie(&self, name: &str) -> Option<String> {
        cookie::get(name)
    }

    fn clear(&self) {
        clear_login();
        crate::auth::expiry::notify_session_expired();
    }
}

impl Navigator for BrowserSession {
    fn navigate(&self, path: &str) {
        navigate(path);
    }
}

/// Full-page navigation to `path`
pub fn navigate(path: &str) {
    if let Err(e) = gloo::utils::window().location().set_href(path) {
        error!(path, error = ?e, "navigation failed");
    }
}

/// Whether an access token is stored
pub fn is_logged_in() -> bool {
    BrowserSession.access_token().is_some()
}

/// Cached user record; missing or corrupt entries read as `None`
pub fn stored_user() -> Option<StoredUser> {
    LocalStore::get(AuthConfig::USER_KEY)
}

/// Persist a fresh login
pub fn save_login(access_token: &str, user: &StoredUser) -> Result<(), BrowserError> {
    LocalStore::set_raw(AuthConfig::ACCESS_TOKEN_KEY, access_token)?;
    LocalStore::set(AuthConfig::USER_KEY, user)?;
    Ok(())
}

/// Forget the access token and the user record
pub fn clear_login() {
    LocalStore::remove(AuthConfig::ACCESS_TOKEN_KEY);
    LocalStore::remove(AuthConfig::USER_KEY);
}
