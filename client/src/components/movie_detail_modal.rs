//! Modal overlay with the selected movie's poster and details.
//!
//! The dialog takes focus when it mounts so Escape reaches its key handler
//! without the user clicking into it first.

#[cfg(test)]
#[path = "movie_detail_modal_test.rs"]
mod movie_detail_modal_test;

use catalog::{Movie, PosterSize};
use leptos::prelude::*;

use crate::components::lazy_poster::LazyPoster;

fn closes_dialog(key: &str) -> bool {
    key == "Escape"
}

/// Detail overlay. Closes on the close button, backdrop click, or Escape.
#[component]
pub fn MovieDetailModal(movie: Movie, on_close: Callback<()>) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if closes_dialog(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    };

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(dialog) = dialog_ref.get() {
                let _ = dialog.focus();
            }
        }
    });

    let rating = movie.rating_label();
    let Movie { poster_path, title, release_date, overview, .. } = movie;
    let alt = title.clone();

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog movie-detail"
                role="dialog"
                aria-modal="true"
                tabindex="-1"
                node_ref=dialog_ref
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <button class="icon-btn movie-detail__close" on:click=on_close_click title="Close" aria-label="Close">
                    "✕"
                </button>
                <LazyPoster path=poster_path size=PosterSize::Large alt=alt/>
                <div class="movie-detail__body">
                    <h2 class="movie-detail__title">{title}</h2>
                    <p class="movie-detail__meta">"Release date: " {release_date}</p>
                    <p class="movie-detail__meta">"Rating: " {rating}</p>
                    <p class="movie-detail__meta">"Overview: " {overview}</p>
                </div>
            </div>
        </div>
    }
}
