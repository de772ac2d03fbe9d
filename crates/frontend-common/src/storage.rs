//! Persistent key-value storage backed by `localStorage`
//!
//! Structured values are stored as JSON. Entries that fail to parse are
//! reported as missing so a corrupt entry never breaks a page.

use crate::error::BrowserError;
use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub struct LocalStore;

impl LocalStore {
    /// Read and decode a JSON value
    pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
        match LocalStorage::get(key) {
            Ok(value) => Some(value),
            Err(e) => {
                trace!(key, error = %e, "no usable value in localStorage");
                None
            }
        }
    }

    /// Encode and store a JSON value
    pub fn set<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<(), BrowserError> {
        LocalStorage::set(key, value)?;
        Ok(())
    }

    /// Read a plain string entry without JSON decoding
    pub fn get_raw(key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    /// Store a plain string entry without JSON encoding
    pub fn set_raw(key: &str, value: &str) -> Result<(), BrowserError> {
        LocalStorage::raw().set_item(key, value)?;
        Ok(())
    }

    pub fn remove(key: &str) {
        LocalStorage::delete(key);
    }

    pub fn clear() {
        LocalStorage::clear();
    }
}
