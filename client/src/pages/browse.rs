//! Popular-movies browse page: fetch, search, table, detail overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. On mount it issues the popular-movies request
//! once; while it is in flight the page shows a single centered spinner.
//! When it settles the search box and table replace the spinner. The
//! match positions are a memo over the movie list and the search text; the
//! table resolves only the current page against the list.

#[cfg(test)]
#[path = "browse_test.rs"]
mod browse_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use catalog::{ApiConfig, FetchError, Movie, matching_indices};
use leptos::prelude::*;

use crate::components::movie_detail_modal::MovieDetailModal;
use crate::components::movie_table::MovieTable;
use crate::components::search_field::SearchField;
use crate::components::spinner::Spinner;
use crate::state::browse::BrowseState;
use crate::state::detail::DetailState;
use crate::state::movies::MoviesState;

#[component]
pub fn BrowsePage() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let movies = RwSignal::new(MoviesState::default());
    let browse = RwSignal::new(BrowseState::default());
    let detail = RwSignal::new(DetailState::default());

    spawn_fetch(config, movies);

    let search = Memo::new(move |_| browse.with(|b| b.search.clone()));
    let matches = Memo::new(move |_| search.with(|term| movies.with(|m| matching_indices(&m.movies, term))));

    let on_search = Callback::new(move |term: String| browse.update(|b| b.set_search(term)));
    let on_select = Callback::new(move |movie: Movie| detail.update(|d| d.select(movie)));
    let on_close = Callback::new(move |()| detail.update(DetailState::close));

    view! {
        <section class="browse">
            <Show
                when=move || !movies.with(|m| m.loading)
                fallback=|| {
                    view! {
                        <div class="browse__loading">
                            <Spinner large=true/>
                        </div>
                    }
                }
            >
                <div class="paper browse__panel">
                    <SearchField value=search on_input=on_search/>
                    <MovieTable movies=movies matches=matches browse=browse on_select=on_select/>
                </div>
            </Show>
            {move || {
                detail
                    .with(|d| d.visible().cloned())
                    .map(|movie| view! { <MovieDetailModal movie=movie on_close=on_close/> })
            }}
        </section>
    }
}

/// Issue the one-shot popular-movies request for this page instance.
///
/// The result is dropped if the page was torn down before it settled.
fn spawn_fetch(config: ApiConfig, movies: RwSignal<MoviesState>) {
    let alive = Arc::new(AtomicBool::new(true));
    #[cfg(feature = "hydrate")]
    {
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_popular_movies(&config).await;
            settle(&alive_task, movies, result);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, movies);
    }
    on_cleanup(move || alive.store(false, Ordering::Relaxed));
}

/// Land a fetch result unless the page that issued it is gone.
///
/// Returns whether the result was applied.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn settle(alive: &AtomicBool, movies: RwSignal<MoviesState>, result: Result<Vec<Movie>, FetchError>) -> bool {
    if !alive.load(Ordering::Relaxed) {
        return false;
    }
    movies.update(|s| s.apply_fetch(result));
    true
}
