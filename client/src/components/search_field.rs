//! Single-line title search input.

use leptos::prelude::*;

#[component]
pub fn SearchField(#[prop(into)] value: Signal<String>, on_input: Callback<String>) -> impl IntoView {
    view! {
        <label class="search-field">
            <span class="search-field__label">"Search by title"</span>
            <input
                class="search-field__input"
                type="search"
                autocomplete="off"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}
