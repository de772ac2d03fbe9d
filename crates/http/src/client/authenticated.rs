//! Bearer-authenticated client with a single silent refresh on 401
//!
//! Every call goes through [`AuthenticatedClient::request`]:
//!
//! 1. send with the stored access token (if any),
//! 2. on 401 exchange the `refresh_token` cookie for a new access token,
//! 3. retry once with the new token,
//! 4. if there is no refresh token, the refresh fails, or the retry is
//!    rejected again, clear the session and navigate to `/login`.
//!
//! Refreshes are serialized. A request that waited on another task's refresh
//! reuses what that refresh produced: the new token, or the failure, in which
//! case the other task has already redirected.

use super::QuizClient;
use super::error::ClientError;
use super::request::ApiRequest;
use super::session::{Navigator, SessionStore};
use crate::types::{TokenRefreshRequest, TokenRefreshResponse};
use reqwest::{Method, Response, StatusCode, header};
use std::cell::Cell;
use std::rc::Rc;
use tokio::sync::Mutex;

pub const LOGIN_PATH: &str = "/login";
pub const TOKEN_REFRESH_PATH: &str = "/api/token";
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// Which send this is within one call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    First,
    Retry,
}

/// Result of a single send
#[derive(Debug)]
pub enum RequestOutcome {
    /// Anything other than 401; the status is not checked yet
    Ok(Response),
    /// First send was rejected with 401
    NeedsRefresh {
        /// Access token the rejected request carried
        sent_token: Option<String>,
    },
    /// Retry was rejected with 401
    Unauthorized,
}

/// Result of [`AuthenticatedClient::refresh`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refresh {
    /// A usable access token, new or produced by a concurrent refresh
    Refreshed(String),
    /// This call tried and failed; the caller must redirect
    Failed,
    /// A concurrent refresh for the same rejected token already failed
    AlreadyFailed,
}

/// Last completed token exchange
#[derive(Debug)]
struct LastRefresh {
    sent_token: Option<String>,
    access_token: Option<String>,
}

/// Client that authenticates with the session's access token
#[derive(Clone)]
pub struct AuthenticatedClient {
    inner: QuizClient,
    session: Rc<dyn SessionStore>,
    navigator: Rc<dyn Navigator>,
    refresh_guard: Rc<Mutex<Option<LastRefresh>>>,
    /// Bumped each time a token exchange completes
    refresh_generation: Rc<Cell<u64>>,
}

impl AuthenticatedClient {
    pub fn new(
        inner: QuizClient,
        session: Rc<dyn SessionStore>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            inner,
            session,
            navigator,
            refresh_guard: Rc::new(Mutex::new(None)),
            refresh_generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    /// Number of token exchanges completed so far
    pub fn refresh_generation(&self) -> u64 {
        self.refresh_generation.get()
    }

    /// Send once with the current access token
    pub async fn attempt(
        &self,
        request: &ApiRequest,
        attempt: Attempt,
    ) -> Result<RequestOutcome, ClientError> {
        let token = self.session.access_token();
        let response = self
            .inner
            .build(request, token.as_deref())
            .send()
            .await
            .map_err(|e| {
                error!(
                    method = %request.method(),
                    path = request.path(),
                    error = %e,
                    "request failed"
                );
                ClientError::Request(e)
            })?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(RequestOutcome::Ok(response));
        }

        debug!(path = request.path(), ?attempt, "request rejected with 401");
        Ok(match attempt {
            Attempt::First => RequestOutcome::NeedsRefresh { sent_token: token },
            Attempt::Retry => RequestOutcome::Unauthorized,
        })
    }

    /// Perform a call, refreshing the access token at most once.
    ///
    /// Returns `Ok(None)` when the session could not be recovered and the
    /// page was sent to the login screen.
    pub async fn request(&self, request: ApiRequest) -> Result<Option<Response>, ClientError> {
        let generation = self.refresh_generation();
        let sent_token = match self.attempt(&request, Attempt::First).await? {
            RequestOutcome::Ok(response) => return check_status(response).await.map(Some),
            RequestOutcome::NeedsRefresh { sent_token } => sent_token,
            RequestOutcome::Unauthorized => {
                self.redirect_to_login();
                return Ok(None);
            }
        };

        match self.refresh(sent_token.as_deref(), generation).await {
            Refresh::Refreshed(_) => {}
            Refresh::Failed => {
                self.redirect_to_login();
                return Ok(None);
            }
            Refresh::AlreadyFailed => return Ok(None),
        }

        match self.attempt(&request, Attempt::Retry).await? {
            RequestOutcome::Ok(response) => check_status(response).await.map(Some),
            RequestOutcome::NeedsRefresh { .. } | RequestOutcome::Unauthorized => {
                self.redirect_to_login();
                Ok(None)
            }
        }
    }

    /// Obtain a fresh access token, given the token a rejected request used
    /// and the [`refresh_generation`](Self::refresh_generation) observed
    /// before that request was sent.
    ///
    /// Exchanges that completed after `generation` for the same rejected
    /// token are reused instead of calling the refresh endpoint again.
    pub async fn refresh(&self, stale_token: Option<&str>, generation: u64) -> Refresh {
        let mut last = self.refresh_guard.lock().await;

        let concurrent = last
            .as_ref()
            .filter(|_| self.refresh_generation.get() != generation)
            .filter(|done| done.sent_token.as_deref() == stale_token);
        if let Some(done) = concurrent {
            debug!(refreshed = done.access_token.is_some(), "reusing concurrent token refresh");
            return match &done.access_token {
                Some(token) => Refresh::Refreshed(token.clone()),
                None => Refresh::AlreadyFailed,
            };
        }

        if let Some(current) = self.session.access_token() {
            if Some(current.as_str()) != stale_token {
                debug!("access token already refreshed by another request");
                return Refresh::Refreshed(current);
            }
        }

        let access_token = self.exchange(stale_token).await;
        *last = Some(LastRefresh {
            sent_token: stale_token.map(str::to_owned),
            access_token: access_token.clone(),
        });
        self.refresh_generation.set(self.refresh_generation.get() + 1);

        access_token.map_or(Refresh::Failed, Refresh::Refreshed)
    }

    /// Trade the refresh token cookie for a new access token and store it
    async fn exchange(&self, stale_token: Option<&str>) -> Option<String> {
        let Some(refresh_token) = self.session.cookie(REFRESH_TOKEN_COOKIE) else {
            warn!("no refresh token cookie, cannot refresh session");
            return None;
        };

        let mut request = self
            .inner
            .request(Method::POST, TOKEN_REFRESH_PATH)
            .json(&TokenRefreshRequest { refresh_token });
        if let Some(stale) = stale_token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {stale}"));
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "token refresh request failed");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(status = response.status().as_u16(), "token refresh rejected");
            return None;
        }

        match response.json::<TokenRefreshResponse>().await {
            Ok(body) => {
                self.session.set_access_token(&body.access_token);
                debug!("access token refreshed");
                Some(body.access_token)
            }
            Err(e) => {
                warn!(error = %e, "unreadable token refresh response");
                None
            }
        }
    }

    fn redirect_to_login(&self) {
        info!("session could not be recovered, redirecting to login");
        self.session.clear();
        self.navigator.navigate(LOGIN_PATH);
    }
}

/// Pass 2xx responses through, turn everything else into an API error
async fn check_status(response: Response) -> Result<Response, ClientError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        let error = ClientError::from_response(response).await;
        debug!(error = %error, status = ?error.status(), "api error");
        Err(error)
    }
}
