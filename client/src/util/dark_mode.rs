//! Document-level theme attribute.
//!
//! Mirrors the active mode onto `<html data-theme="...">` so page-level CSS
//! (body background, scrollbars) follows the theme. Requires a browser
//! environment; SSR paths no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use catalog::ThemeMode;

/// Attribute written on the `<html>` element.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute(THEME_ATTRIBUTE, mode.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}
