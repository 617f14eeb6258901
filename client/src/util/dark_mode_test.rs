#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn apply_is_noop_but_callable() {
    apply(ThemeMode::Light);
    apply(ThemeMode::Dark);
}

#[test]
fn attribute_values_match_mode_names() {
    assert_eq!(THEME_ATTRIBUTE, "data-theme");
    assert_eq!(ThemeMode::Dark.as_str(), "dark");
}
