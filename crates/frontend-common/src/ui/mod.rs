//! DOM utilities: toasts, loading overlay and the navbar fragment

pub mod loading;
pub mod navbar;
pub mod toast;

use crate::error::BrowserError;
use web_sys::Element;

/// Escape text for interpolation into HTML markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Create an element with an optional id, class list and inline style
fn create_element(
    tag: &str,
    id: Option<&str>,
    class: &str,
    style: &str,
) -> Result<Element, BrowserError> {
    let element = gloo::utils::document().create_element(tag)?;
    if let Some(id) = id {
        element.set_id(id);
    }
    if !class.is_empty() {
        element.set_class_name(class);
    }
    if !style.is_empty() {
        element.set_attribute("style", style)?;
    }
    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<img src=x onerror="alert('x')">&"#),
            "&lt;img src=x onerror=&quot;alert(&#39;x&#39;)&quot;&gt;&amp;"
        );
        assert_eq!(escape_html("김철수"), "김철수");
    }
}
