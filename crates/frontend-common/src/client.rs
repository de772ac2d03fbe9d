//! Client configuration and initialization

use crate::config::ApiConfig;
use crate::session::BrowserSession;
pub use quiz_http::client::error::ClientError;
use quiz_http::{AuthenticatedClient, QuizClient};
use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    /// Page-wide client instance
    static API_CLIENT: RefCell<Option<AuthenticatedClient>> = const { RefCell::new(None) };
}

fn create_client() -> Result<AuthenticatedClient, ClientError> {
    let location = gloo::utils::window().location();
    let hostname = location.hostname().unwrap_or_default();
    let origin = location.origin().unwrap_or_default();

    let session = Rc::new(BrowserSession);
    let client = QuizClient::builder()
        .origin_for_host(&ApiConfig::origins(origin), &hostname)
        .build()?
        .authenticate(session.clone(), session);

    debug!(base_url = client.base_url(), "api client created");
    Ok(client)
}

/// Get the page's API client, creating it on first use
pub fn api_client() -> Result<AuthenticatedClient, ClientError> {
    if let Some(client) = API_CLIENT.with(|slot| slot.borrow().clone()) {
        return Ok(client);
    }

    let client = create_client()?;
    API_CLIENT.with(|slot| *slot.borrow_mut() = Some(client.clone()));
    Ok(client)
}
