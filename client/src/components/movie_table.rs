//! Paginated movie grid with fixed columns.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the current page of the match positions handed down by the
//! browse page. Paging state lives in `BrowseState` so search changes can
//! reset it; this module only slices and reports row selection (click, or
//! Enter/Space on a focused row).

#[cfg(test)]
#[path = "movie_table_test.rs"]
mod movie_table_test;

use catalog::{Movie, PAGE_SIZE_OPTIONS, PosterSize};
use leptos::prelude::*;

use crate::components::lazy_poster::LazyPoster;
use crate::state::browse::BrowseState;
use crate::state::movies::MoviesState;

#[derive(Clone, Copy, Debug)]
struct Column {
    header: &'static str,
    width_px: u16,
    numeric: bool,
}

const COLUMNS: &[Column] = &[
    Column { header: "ID", width_px: 70, numeric: false },
    Column { header: "Poster", width_px: 150, numeric: false },
    Column { header: "Title", width_px: 200, numeric: false },
    Column { header: "Release date", width_px: 150, numeric: false },
    Column { header: "Rating", width_px: 130, numeric: true },
];

fn column_class(column: &Column) -> &'static str {
    if column.numeric { "movie-table__cell movie-table__cell--numeric" } else { "movie-table__cell" }
}

/// Keys that open the detail overlay for a focused row.
fn activates_row(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Grid body plus pagination footer.
#[component]
pub fn MovieTable(
    movies: RwSignal<MoviesState>,
    #[prop(into)] matches: Signal<Vec<usize>>,
    browse: RwSignal<BrowseState>,
    on_select: Callback<Movie>,
) -> impl IntoView {
    let total = Signal::derive(move || matches.with(Vec::len));
    // Only the visible page is copied out, for the row views to own.
    let page_rows = move || {
        browse.with(|b| {
            matches.with(|idx| {
                movies.with(|m| b.page_rows(&m.movies, idx).into_iter().cloned().collect::<Vec<Movie>>())
            })
        })
    };

    view! {
        <div class="movie-table">
            <table class="movie-table__grid">
                <colgroup>
                    {COLUMNS
                        .iter()
                        .map(|column| view! { <col style=format!("width: {}px", column.width_px)/> })
                        .collect_view()}
                </colgroup>
                <thead>
                    <tr>
                        {COLUMNS
                            .iter()
                            .map(|column| view! { <th class=column_class(column)>{column.header}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let visible = page_rows();
                        if visible.is_empty() {
                            return view! {
                                <tr class="movie-table__empty">
                                    <td colspan=COLUMNS.len().to_string()>"No movies"</td>
                                </tr>
                            }
                            .into_any();
                        }
                        visible
                            .into_iter()
                            .map(|movie| view! { <MovieRow movie=movie on_select=on_select/> })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
            <TablePagination total=total browse=browse/>
        </div>
    }
}

#[component]
fn MovieRow(movie: Movie, on_select: Callback<Movie>) -> impl IntoView {
    let rating = movie.rating_label();
    let clicked = movie.clone();
    let pressed = movie.clone();
    let Movie { id, poster_path, title, release_date, .. } = movie;
    let alt = title.clone();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if activates_row(&ev.key()) {
            ev.prevent_default();
            on_select.run(pressed.clone());
        }
    };

    view! {
        <tr
            class="movie-table__row"
            tabindex="0"
            on:click=move |_| on_select.run(clicked.clone())
            on:keydown=on_keydown
        >
            <td class=column_class(&COLUMNS[0])>{id}</td>
            <td class=column_class(&COLUMNS[1])>
                <LazyPoster path=poster_path size=PosterSize::Thumbnail alt=alt/>
            </td>
            <td class=column_class(&COLUMNS[2])>{title}</td>
            <td class=column_class(&COLUMNS[3])>{release_date}</td>
            <td class=column_class(&COLUMNS[4])>{rating}</td>
        </tr>
    }
}

#[component]
fn TablePagination(total: Signal<usize>, browse: RwSignal<BrowseState>) -> impl IntoView {
    let pager = move || browse.with(|b| b.pager);

    let on_page_size = move |ev: leptos::ev::Event| {
        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
            browse.update(|b| {
                b.set_page_size(size);
            });
        }
    };

    view! {
        <div class="movie-table__footer">
            <label class="movie-table__page-size">
                "Rows per page:"
                <select prop:value=move || pager().page_size().to_string() on:change=on_page_size>
                    {PAGE_SIZE_OPTIONS
                        .iter()
                        .map(|size| view! { <option value=size.to_string()>{*size}</option> })
                        .collect_view()}
                </select>
            </label>
            <span class="movie-table__range">{move || pager().range_label(total.get())}</span>
            <button
                class="btn icon-btn"
                title="Previous page"
                disabled=move || !pager().has_previous(total.get())
                on:click=move |_| browse.update(|b| b.pager.previous(total.get_untracked()))
            >
                "‹"
            </button>
            <button
                class="btn icon-btn"
                title="Next page"
                disabled=move || !pager().has_next(total.get())
                on:click=move |_| browse.update(|b| b.pager.next(total.get_untracked()))
            >
                "›"
            </button>
        </div>
    }
}
