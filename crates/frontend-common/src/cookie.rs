//! `document.cookie` helpers

use crate::config::AuthConfig;
use crate::error::BrowserError;
use chrono::{DateTime, Duration, Utc};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Find a cookie value in a `document.cookie` style header
pub fn find_cookie(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header
        .split(';')
        .map(str::trim_start)
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name).then(|| value.to_string())
        })
}

/// Build the string assigned to `document.cookie`
pub fn set_cookie_string(name: &str, value: &str, expires: Option<DateTime<Utc>>) -> String {
    let expires = expires
        .map(|at| format!("; expires={}", at.format("%a, %d %b %Y %H:%M:%S GMT")))
        .unwrap_or_default();
    format!("{name}={value}{expires}; path=/")
}

fn html_document() -> Result<HtmlDocument, BrowserError> {
    gloo::utils::document()
        .dyn_into::<HtmlDocument>()
        .map_err(|_| BrowserError::MissingElement("html document"))
}

/// Read a cookie
pub fn get(name: &str) -> Option<String> {
    let header = html_document().ok()?.cookie().ok()?;
    find_cookie(&header, name)
}

/// Write a cookie for the whole site, expiring after `days` if given
pub fn set(name: &str, value: &str, days: Option<i64>) -> Result<(), BrowserError> {
    let expires = days.map(|days| Utc::now() + Duration::days(days));
    html_document()?.set_cookie(&set_cookie_string(name, value, expires))?;
    Ok(())
}

/// Expire a cookie immediately
pub fn delete(name: &str) -> Result<(), BrowserError> {
    html_document()?.set_cookie(&set_cookie_string(name, "", Some(DateTime::UNIX_EPOCH)))?;
    Ok(())
}

/// Anonymous visitor id, if the backend issued one
pub fn guest_id() -> Option<String> {
    get(AuthConfig::GUEST_ID_COOKIE)
}

pub fn has_guest_id() -> bool {
    guest_id().is_some_and(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn finds_cookie_among_others() {
        let header = "guest_id=g-1; refresh_token=abc.def=; theme=dark";
        assert_eq!(find_cookie(header, "refresh_token").as_deref(), Some("abc.def="));
        assert_eq!(find_cookie(header, "guest_id").as_deref(), Some("g-1"));
        assert_eq!(find_cookie(header, "missing"), None);
    }

    #[test]
    fn name_must_match_exactly() {
        let header = "xrefresh_token=1; refresh_token_old=2";
        assert_eq!(find_cookie(header, "refresh_token"), None);
        assert_eq!(find_cookie("", "refresh_token"), None);
    }

    #[test]
    fn set_string_formats_expiry_in_gmt() {
        let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(
            set_cookie_string("guest_id", "g-1", Some(at)),
            "guest_id=g-1; expires=Thu, 02 Jan 2025 03:04:05 GMT; path=/"
        );
        assert_eq!(set_cookie_string("a", "b", None), "a=b; path=/");
    }

    #[test]
    fn delete_uses_epoch() {
        assert_eq!(
            set_cookie_string("refresh_token", "", Some(DateTime::UNIX_EPOCH)),
            "refresh_token=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/"
        );
    }
}
