//! Theme controller: current mode, derived palette, and toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one [`ThemeContext`] and provides it to the whole tree. The
//! mode starts absent and is read from the preference store after the client
//! mounts; until then consumers render nothing. Server-rendered HTML therefore
//! matches the first hydrated frame regardless of the stored preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use catalog::{Theme, ThemeMode};
use leptos::prelude::*;

use crate::util::preference_store::{BrowserStorage, PreferenceStore, read_theme_mode, write_theme_mode};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    mode: Option<ThemeMode>,
}

impl ThemeState {
    /// Load the persisted mode once. Later calls keep the current mode.
    pub fn initialize(&mut self, store: &impl PreferenceStore) -> ThemeMode {
        *self.mode.get_or_insert_with(|| read_theme_mode(store))
    }

    pub fn mode(&self) -> Option<ThemeMode> {
        self.mode
    }

    /// Palette for the current mode; `None` before initialization.
    pub fn theme(&self) -> Option<Theme> {
        self.mode.map(Theme::for_mode)
    }

    /// Flip light/dark and persist the new mode. No-op before initialization.
    pub fn toggle(&mut self, store: &impl PreferenceStore) -> Option<ThemeMode> {
        let next = self.mode?.toggled();
        write_theme_mode(store, next);
        self.mode = Some(next);
        Some(next)
    }
}

/// Shared handle to the theme state, provided via Leptos context.
#[derive(Clone, Copy, Debug)]
pub struct ThemeContext {
    state: RwSignal<ThemeState>,
}

impl ThemeContext {
    pub fn new() -> Self {
        Self { state: RwSignal::new(ThemeState::default()) }
    }

    /// Read the stored preference. Call from a client-only effect.
    pub fn initialize(&self) {
        self.state.update(|s| {
            s.initialize(&BrowserStorage);
        });
    }

    pub fn mode(&self) -> Option<ThemeMode> {
        self.state.with(ThemeState::mode)
    }

    pub fn theme(&self) -> Option<Theme> {
        self.state.with(ThemeState::theme)
    }

    pub fn toggle(&self) {
        self.state.update(|s| {
            s.toggle(&BrowserStorage);
        });
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}
