//! Browser-side helpers shared by the quiz pages

#[macro_use]
extern crate tracing;

pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod cookie;
pub mod debounce;
pub mod error;
pub mod format;
pub mod logging;
pub mod session;
pub mod storage;
pub mod ui;

pub use auth::context::AuthContext;
pub use client::api_client;
pub use components::Spinner;
pub use config::{ApiConfig, AuthConfig, UiConfig};
pub use debounce::Debouncer;
pub use error::BrowserError;
pub use session::BrowserSession;
