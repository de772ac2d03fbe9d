//! Trailing-edge debounce on top of browser timers

use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Runs the callback once, `wait_ms` after the most recent [`call`](Self::call).
///
/// Dropping the debouncer cancels a pending run.
pub struct Debouncer {
    wait_ms: u32,
    callback: Rc<dyn Fn()>,
    pending: RefCell<Option<Timeout>>,
}

impl Debouncer {
    pub fn new(wait_ms: u32, callback: impl Fn() + 'static) -> Self {
        Self {
            wait_ms,
            callback: Rc::new(callback),
            pending: RefCell::new(None),
        }
    }

    /// Restart the wait window
    pub fn call(&self) {
        let callback = self.callback.clone();
        let timeout = Timeout::new(self.wait_ms, move || callback());
        // Dropping a Timeout clears it
        *self.pending.borrow_mut() = Some(timeout);
    }

    /// Drop a pending run without invoking it
    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}
