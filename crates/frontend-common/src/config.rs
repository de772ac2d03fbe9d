//! Frontend configuration

use quiz_http::ApiOrigins;

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// localStorage key holding the raw access token
    pub const ACCESS_TOKEN_KEY: &'static str = "access_token";

    /// localStorage key holding the cached user record
    pub const USER_KEY: &'static str = "user";

    /// Cookie holding the refresh token
    pub const REFRESH_TOKEN_COOKIE: &'static str =
        quiz_http::client::authenticated::REFRESH_TOKEN_COOKIE;

    /// Cookie identifying an anonymous visitor
    pub const GUEST_ID_COOKIE: &'static str = "guest_id";

    /// Where the user lands after logging out
    pub const HOME_PATH: &'static str = "/";
}

/// API endpoint configuration
pub struct ApiConfig;

impl ApiConfig {
    /// Backend origin used while developing on localhost
    pub const LOCAL_ORIGIN: &'static str = ApiOrigins::DEFAULT_LOCAL_ORIGIN;

    /// Origins to pick from; production traffic goes to the page's own origin
    pub fn origins(page_origin: impl Into<String>) -> ApiOrigins {
        ApiOrigins::new(Self::LOCAL_ORIGIN, page_origin)
    }
}

/// UI timing and element ids
pub struct UiConfig;

impl UiConfig {
    /// How long a toast stays on screen
    pub const TOAST_DURATION_MS: u32 = 3_000;

    pub const TOAST_CONTAINER_ID: &'static str = "toastContainer";

    pub const LOADING_OVERLAY_ID: &'static str = "loadingOverlay";

    pub const DEFAULT_LOADING_MESSAGE: &'static str = "로딩 중...";
}
