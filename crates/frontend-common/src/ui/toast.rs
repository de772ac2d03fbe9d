//! Transient notifications

use super::create_element;
use crate::config::UiConfig;
use crate::error::BrowserError;
use gloo::timers::callback::Timeout;
use quiz_http::ClientError;
use web_sys::Element;

const CONTAINER_STYLE: &str =
    "position: fixed; top: 80px; right: 20px; z-index: 10000; display: flex; flex-direction: column; gap: 8px;";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
            Self::Info => "ℹ",
        }
    }

    /// Bootstrap alert class
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "alert alert-success shadow-sm mb-0",
            Self::Error => "alert alert-danger shadow-sm mb-0",
            Self::Info => "alert alert-info shadow-sm mb-0",
        }
    }

    /// Text shown in the toast
    pub fn label(self, message: &str) -> String {
        format!("{} {message}", self.icon())
    }
}

fn container() -> Result<Element, BrowserError> {
    let document = gloo::utils::document();
    if let Some(existing) = document.get_element_by_id(UiConfig::TOAST_CONTAINER_ID) {
        return Ok(existing);
    }

    let container = create_element(
        "div",
        Some(UiConfig::TOAST_CONTAINER_ID),
        "",
        CONTAINER_STYLE,
    )?;
    gloo::utils::body().append_child(&container)?;
    Ok(container)
}

/// Show a toast that removes itself after [`UiConfig::TOAST_DURATION_MS`]
pub fn show(kind: ToastKind, message: &str) -> Result<(), BrowserError> {
    let toast = create_element("div", None, kind.class(), "")?;
    toast.set_attribute("role", "alert")?;
    toast.set_text_content(Some(&kind.label(message)));
    container()?.append_child(&toast)?;

    Timeout::new(UiConfig::TOAST_DURATION_MS, move || toast.remove()).forget();
    Ok(())
}

fn show_or_log(kind: ToastKind, message: &str) {
    if let Err(e) = show(kind, message) {
        warn!(error = %e, message, "could not show toast");
    }
}

pub fn success(message: &str) {
    show_or_log(ToastKind::Success, message);
}

pub fn error(message: &str) {
    show_or_log(ToastKind::Error, message);
}

pub fn info(message: &str) {
    show_or_log(ToastKind::Info, message);
}

/// Show a failed API call to the user
pub fn surface_error(error: &ClientError) {
    self::error(&error.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_carry_kind_icon() {
        assert_eq!(ToastKind::Success.label("저장됨"), "✓ 저장됨");
        assert_eq!(ToastKind::Error.label("실패"), "✗ 실패");
        assert_eq!(ToastKind::Info.label("안내"), "ℹ 안내");
    }
}
