//! Page-wide hook fired when the API client gives up on the session
//!
//! The client clears the session through [`BrowserSession`] before sending
//! the page to the login screen; whoever registered here (normally the
//! [`AuthProvider`]) gets to update its state first.
//!
//! [`BrowserSession`]: crate::session::BrowserSession
//! [`AuthProvider`]: super::AuthProvider

use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static SESSION_EXPIRED_CALLBACK: RefCell<Option<Rc<dyn Fn()>>> = RefCell::new(None);
}

/// Register the session expiry callback, replacing any previous one
pub fn set_session_expired_callback(callback: Rc<dyn Fn()>) {
    SESSION_EXPIRED_CALLBACK.with(|cb| {
        *cb.borrow_mut() = Some(callback);
    });
}

/// Remove the session expiry callback
pub fn clear_session_expired_callback() {
    SESSION_EXPIRED_CALLBACK.with(|cb| {
        *cb.borrow_mut() = None;
    });
}

/// Run the registered callback, if any
pub fn notify_session_expired() {
    // Clone out so the callback may re-register
    let callback = SESSION_EXPIRED_CALLBACK.with(|cb| cb.borrow().clone());
    if let Some(callback) = callback {
        callback();
    }
}
