use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::ui::icon::{Icon, icons};
use crate::ui::pages::{DeckPage, HomePage, NotFoundPage, PrivacyPage, TermsPage};
use crate::ui::theme::{provide_theme_context, use_theme_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href="/favicon.svg" type="image/svg+xml"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-white text-zinc-900 dark:bg-zinc-950 dark:text-zinc-100 antialiased">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/nodal-site.css"/>
        <Title text="Nodal"/>

        <ThemeToggle />

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("deck") view=DeckPage/>
                <Route path=StaticSegment("terms") view=TermsPage/>
                <Route path=StaticSegment("privacy") view=PrivacyPage/>
            </Routes>
        </Router>
    }
}

/// Theme toggle button component
#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <button
            type="button"
            class="fixed top-4 right-4 z-50 p-2 rounded-full border border-zinc-300 dark:border-zinc-700
                   bg-white/80 dark:bg-zinc-900/80 backdrop-blur hover:bg-zinc-100 dark:hover:bg-zinc-800 transition-colors"
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
        >
            {move || {
                if theme.is_dark.get() {
                    view! { <Icon name=icons::SUN class="w-5 h-5 invert" /> }
                } else {
                    view! { <Icon name=icons::MOON class="w-5 h-5" /> }
                }
            }}
        </button>
    }
}
