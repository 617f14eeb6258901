//! Icon button flipping the light/dark theme.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use catalog::ThemeMode;
use leptos::prelude::*;

use crate::state::theme::ThemeContext;

/// Sun while dark (click for light), moon while light.
fn toggle_icon(mode: Option<ThemeMode>) -> &'static str {
    if mode == Some(ThemeMode::Dark) { "☀" } else { "☾" }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    view! {
        <button
            class="btn icon-btn theme-toggle"
            on:click=move |_| theme.toggle()
            title="Toggle light/dark theme"
            aria-label="Toggle light/dark theme"
        >
            {move || toggle_icon(theme.mode())}
        </button>
    }
}
