//! Full-screen loading overlay

use super::create_element;
use crate::config::UiConfig;
use crate::error::BrowserError;

const OVERLAY_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
     background: rgba(0,0,0,0.5); display: flex; align-items: center; \
     justify-content: center; z-index: 9999;";

const PANEL_STYLE: &str =
    "background: white; padding: 30px; border-radius: 15px; text-align: center;";

/// Show the overlay, replacing one that is already visible
pub fn show(message: Option<&str>) -> Result<(), BrowserError> {
    hide();

    let overlay = create_element("div", Some(UiConfig::LOADING_OVERLAY_ID), "", OVERLAY_STYLE)?;
    let panel = create_element("div", None, "", PANEL_STYLE)?;
    let spinner = create_element("div", None, "spinner-border text-primary mb-3", "")?;
    spinner.set_attribute("role", "status")?;
    let text = create_element("p", None, "mb-0", "")?;
    text.set_text_content(Some(message.unwrap_or(UiConfig::DEFAULT_LOADING_MESSAGE)));

    panel.append_child(&spinner)?;
    panel.append_child(&text)?;
    overlay.append_child(&panel)?;
    gloo::utils::body().append_child(&overlay)?;
    Ok(())
}

/// Remove the overlay if present
pub fn hide() {
    if let Some(overlay) = gloo::utils::document().get_element_by_id(UiConfig::LOADING_OVERLAY_ID) {
        overlay.remove();
    }
}

/// Whether the overlay is currently shown
pub fn is_visible() -> bool {
    gloo::utils::document()
        .get_element_by_id(UiConfig::LOADING_OVERLAY_ID)
        .is_some()
}
