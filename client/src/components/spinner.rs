//! Indeterminate loading spinner.

use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional)] large: bool) -> impl IntoView {
    view! {
        <div class="spinner" class:spinner--large=large role="status" aria-label="loading"></div>
    }
}
