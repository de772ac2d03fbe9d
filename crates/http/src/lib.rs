//! Quiz HTTP client
//!
//! Typed access to the quiz REST API with bearer authentication and a single
//! silent token refresh when the backend answers 401. Browser state (token
//! storage, cookies, page navigation) is injected through the traits in
//! [`client::session`] so the request flow runs the same in a browser and in
//! native tests.

#[macro_use]
extern crate tracing;

pub mod client;
pub mod types;

pub use client::{
    ApiOrigins, ApiRequest, Attempt, AuthenticatedClient, QuizClient, QuizClientBuilder, Refresh,
    RequestOutcome, error::ClientError,
};
pub use types::{StoredUser, UserProfile, UserRole};
