//! Not found page component

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::sections::Logo;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Nodal - Page not found" />

        <div class="min-h-screen flex flex-col items-center justify-center p-4 bg-dots">
            <div class="text-center">
                <Logo class="h-12 mx-auto mb-8" />

                <h1 class="font-heading text-6xl text-zinc-900 dark:text-white mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-zinc-900 dark:text-white mb-2">
                    "this node doesn't exist"
                </h2>
                <p class="text-zinc-600 dark:text-zinc-300 mb-8 max-w-md mx-auto">
                    "The page you're looking for was moved, deleted, or never made it onto the board."
                </p>

                <A href="/" attr:class="btn-base btn-primary">
                    "Back to Nodal"
                </A>
            </div>
        </div>
    }
}
