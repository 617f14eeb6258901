//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use catalog::ApiConfig;

use crate::components::theme_toggle::ThemeToggle;
use crate::pages::browse::BrowsePage;
use crate::state::theme::ThemeContext;
use crate::util::config::{META_API_KEY, META_BASE_URL, read_api_config};
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The movie API config is published as `<meta>` tags for the client to
/// read back after hydration.
pub fn shell(options: LeptosOptions, api: ApiConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_BASE_URL content=api.base_url/>
                <meta name=META_API_KEY content=api.api_key/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the theme controller and API config and provides both via context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = ThemeContext::new();
    provide_context(theme);
    provide_context(read_api_config());

    // Effects run only in the browser, after hydration.
    Effect::new(move || theme.initialize());
    Effect::new(move || {
        if let Some(mode) = theme.mode() {
            dark_mode::apply(mode);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/movie-browser.css"/>
        <Title text="Popular Movies"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AppContent/>
            </Routes>
        </Router>
    }
}

/// Themed page body. Renders nothing until the theme is initialized.
#[component]
fn AppContent() -> impl IntoView {
    let Some(theme) = use_context::<ThemeContext>() else {
        return ().into_any();
    };

    view! {
        <Show when=move || theme.theme().is_some()>
            <div class="app" style=move || theme.theme().map(|t| t.css_vars()).unwrap_or_default()>
                <div class="container">
                    <header class="app__header">
                        <h1 class="app__title">"Popular Movies"</h1>
                        <ThemeToggle/>
                    </header>
                    <BrowsePage/>
                </div>
            </div>
        </Show>
    }
    .into_any()
}
