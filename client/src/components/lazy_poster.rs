//! Poster image that loads only when scrolled into view.
//!
//! Uses native `loading="lazy"` and keeps a spinner over the image until its
//! `load` event fires. A missing poster path renders the placeholder without
//! issuing any request; a failed load swaps to the same placeholder.

#[cfg(test)]
#[path = "lazy_poster_test.rs"]
mod lazy_poster_test;

use catalog::{PosterSize, poster_url};
use leptos::prelude::*;

use crate::components::spinner::Spinner;

fn size_modifier(size: PosterSize) -> &'static str {
    match size {
        PosterSize::Thumbnail => "poster--thumb",
        PosterSize::Large => "poster--large",
    }
}

#[component]
pub fn LazyPoster(
    #[prop(into)] path: Option<String>,
    size: PosterSize,
    #[prop(into)] alt: String,
) -> impl IntoView {
    let class = format!("poster {}", size_modifier(size));
    let Some(src) = poster_url(path.as_deref(), size) else {
        return view! {
            <div class=class>
                <PosterPlaceholder/>
            </div>
        }
        .into_any();
    };

    let loaded = RwSignal::new(false);
    let failed = RwSignal::new(false);

    view! {
        <div class=class>
            <Show when=move || failed.get()>
                <PosterPlaceholder/>
            </Show>
            <Show when=move || !loaded.get() && !failed.get()>
                <div class="poster__pending">
                    <Spinner/>
                </div>
            </Show>
            <img
                class="poster__img"
                class:poster__img--pending=move || !loaded.get()
                class:poster__img--failed=move || failed.get()
                src=src
                alt=alt
                loading="lazy"
                on:load=move |_| loaded.set(true)
                on:error=move |_| failed.set(true)
            />
        </div>
    }
    .into_any()
}

#[component]
fn PosterPlaceholder() -> impl IntoView {
    view! {
        <div class="poster__placeholder" role="img" aria-label="No poster">
            "No poster"
        </div>
    }
}
