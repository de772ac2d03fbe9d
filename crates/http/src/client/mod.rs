//! Quiz API client

pub mod api;
pub mod authenticated;
pub mod error;
pub mod request;
pub mod session;

pub use authenticated::{Attempt, AuthenticatedClient, Refresh, RequestOutcome};
pub use request::ApiRequest;

use error::ClientError;
use reqwest::{Client, ClientBuilder, header};
use session::{Navigator, SessionStore};
use std::rc::Rc;
use std::time::Duration;

/// Origins the client may talk to, picked by the page's host name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiOrigins {
    /// Used when the page is served from `localhost`
    pub local: String,
    /// Used everywhere else
    pub production: String,
}

impl ApiOrigins {
    pub const LOCAL_HOST: &'static str = "localhost";
    pub const DEFAULT_LOCAL_ORIGIN: &'static str = "http://localhost:8080";

    pub fn new(local: impl Into<String>, production: impl Into<String>) -> Self {
        Self {
            local: local.into(),
            production: production.into(),
        }
    }

    /// Default local origin, given production origin
    pub fn with_production(production: impl Into<String>) -> Self {
        Self::new(Self::DEFAULT_LOCAL_ORIGIN, production)
    }

    /// Origin for the given host name
    pub fn select(&self, hostname: &str) -> &str {
        if hostname == Self::LOCAL_HOST {
            &self.local
        } else {
            &self.production
        }
    }
}

/// Unauthenticated quiz API client
#[derive(Clone)]
pub struct QuizClient {
    client: Client,
    base_url: String,
}

impl QuizClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> QuizClientBuilder {
        QuizClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder for a path relative to the base URL
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Turn an [`ApiRequest`] into a sendable request, attaching `token` as
    /// bearer credential when present
    pub fn build(&self, request: &ApiRequest, token: Option<&str>) -> reqwest::RequestBuilder {
        let mut builder = self
            .request(request.method().clone(), request.path())
            .header(header::CONTENT_TYPE, "application/json");

        if !request.query_pairs().is_empty() {
            builder = builder.query(request.query_pairs());
        }

        for (name, value) in request.headers() {
            if token.is_some() && name.eq_ignore_ascii_case(header::AUTHORIZATION.as_str()) {
                continue;
            }
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        if let Some(body) = request.body() {
            builder = builder.body(body.to_string());
        }

        builder
    }

    /// Attach session capabilities to get an authenticated client
    pub fn authenticate(
        self,
        session: Rc<dyn SessionStore>,
        navigator: Rc<dyn Navigator>,
    ) -> AuthenticatedClient {
        AuthenticatedClient::new(self, session, navigator)
    }
}

/// Builder for QuizClient
#[derive(Default)]
pub struct QuizClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl QuizClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Pick the base URL from `origins` by the page's host name
    pub fn origin_for_host(self, origins: &ApiOrigins, hostname: &str) -> Self {
        self.base_url(origins.select(hostname))
    }

    /// Set the request timeout (ignored on wasm)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<QuizClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        #[cfg(target_arch = "wasm32")]
        let _ = self.timeout;

        client_builder = client_builder.user_agent(
            self.user_agent
                .unwrap_or_else(|| concat!("quiz-client/", env!("CARGO_PKG_VERSION")).to_string()),
        );

        let client = client_builder.build()?;

        Ok(QuizClient { client, base_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localhost_selects_local_origin() {
        let origins = ApiOrigins::with_production("https://quiz.example.com");
        assert_eq!(origins.select("localhost"), "http://localhost:8080");
        assert_eq!(origins.select("quiz.example.com"), "https://quiz.example.com");
        assert_eq!(origins.select("127.0.0.1"), "https://quiz.example.com");
    }

    #[test]
    fn builder_trims_trailing_slash() {
        let client = QuizClient::builder()
            .origin_for_host(
                &ApiOrigins::with_production("https://quiz.example.com/"),
                "quiz.example.com",
            )
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://quiz.example.com");
    }

    #[test]
    fn builder_requires_base_url() {
        let result = QuizClient::builder().build();
        assert!(matches!(result, Err(ClientError::Configuration(_))));
    }

    #[test]
    fn bearer_token_replaces_caller_authorization() {
        let client = QuizClient::new("http://localhost:8080").unwrap();
        let request = ApiRequest::get("/api/problems")
            .header("Authorization", "Basic abc")
            .header("X-Trace", "1");

        let built = client.build(&request, Some("tok")).build().unwrap();
        let auth: Vec<_> = built.headers().get_all("authorization").iter().collect();
        assert_eq!(auth, ["Bearer tok"]);
        assert_eq!(built.headers()["x-trace"], "1");
        assert_eq!(built.headers()["content-type"], "application/json");

        let built = client.build(&request, None).build().unwrap();
        assert_eq!(built.headers()["authorization"], "Basic abc");
    }
}
