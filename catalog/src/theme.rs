//! Light/dark theme mode and the palette derived from it.
//!
//! DESIGN
//! ======
//! `Theme` is a pure function of `ThemeMode`; there is no other theme state.
//! The persisted form of the mode is the JSON string `"light"` or `"dark"`,
//! stored under [`THEME_STORAGE_KEY`].

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

/// Preference key holding the JSON-encoded theme mode.
pub const THEME_STORAGE_KEY: &str = "themeMode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Encode for the preference store (`"\"dark\""`).
    #[must_use]
    pub fn to_stored(self) -> String {
        format!("\"{}\"", self.as_str())
    }

    /// Decode a stored value. Anything unreadable falls back to light.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(|value| serde_json::from_str(value).ok())
            .unwrap_or_default()
    }
}

/// Palette applied to the whole UI for one mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub background: &'static str,
    pub paper: &'static str,
    pub primary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub divider: &'static str,
}

impl Theme {
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                mode,
                background: "#ffffff",
                paper: "#ffffff",
                primary: "#1976d2",
                text_primary: "rgba(0, 0, 0, 0.87)",
                text_secondary: "rgba(0, 0, 0, 0.6)",
                divider: "rgba(0, 0, 0, 0.12)",
            },
            ThemeMode::Dark => Self {
                mode,
                background: "#121212",
                paper: "#1e1e1e",
                primary: "#90caf9",
                text_primary: "#ffffff",
                text_secondary: "rgba(255, 255, 255, 0.7)",
                divider: "rgba(255, 255, 255, 0.12)",
            },
        }
    }

    /// Inline `style` value exposing the palette as CSS custom properties.
    #[must_use]
    pub fn css_vars(&self) -> String {
        format!(
            "--color-bg: {}; --color-paper: {}; --color-primary: {}; --color-text: {}; --color-text-secondary: {}; --color-divider: {};",
            self.background, self.paper, self.primary, self.text_primary, self.text_secondary, self.divider
        )
    }
}
