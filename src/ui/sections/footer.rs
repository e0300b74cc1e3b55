use chrono::Datelike;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{FOOTER_LEGAL, FOOTER_MOTTO, FOOTER_SOCIAL, FOOTER_TAGLINE, links};
use crate::ui::common::is_external;
use crate::ui::icon::Icon;
use crate::ui::sections::hero::Logo;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="py-12 px-4 border-t border-zinc-200 dark:border-zinc-800">
            <div class="max-w-6xl mx-auto">
                <div class="flex flex-col md:flex-row items-center justify-between gap-8 mb-8">
                    <div class="flex items-center gap-3">
                        <Logo class="h-8" />
                        <span class="font-heading text-xl text-zinc-900 dark:text-white">{FOOTER_TAGLINE}</span>
                    </div>

                    <div class="flex items-center gap-4">
                        {FOOTER_SOCIAL
                            .iter()
                            .map(|social| {
                                let external = !social.href.starts_with("mailto:");
                                view! {
                                    <a
                                        href=social.href
                                        aria-label=social.label
                                        target=external.then_some("_blank")
                                        rel=external.then_some("noopener noreferrer")
                                        class="p-2 rounded-full hover:bg-zinc-100 dark:hover:bg-zinc-800 transition-colors"
                                    >
                                        <Icon name=social.icon class="w-5 h-5 dark:invert" />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <p class="text-center text-sm text-zinc-500 dark:text-zinc-400 mb-8">{FOOTER_MOTTO}</p>

                <div class="pt-8 border-t border-zinc-200 dark:border-zinc-800 flex flex-col sm:flex-row items-center justify-between gap-4 text-sm text-zinc-500 dark:text-zinc-400">
                    <span>
                        {format!("© {year} Nodal. Made by ")}
                        <a href=links::AUTHOR target="_blank" rel="noopener noreferrer" class="underline hover:text-zinc-900 dark:hover:text-white">
                            "Jack Nycz"
                        </a>
                    </span>
                    <nav class="flex items-center gap-6">
                        {FOOTER_LEGAL
                            .iter()
                            .map(|(label, href)| {
                                if is_external(href) {
                                    view! {
                                        <a href=*href class="hover:text-zinc-900 dark:hover:text-white transition-colors">
                                            {*label}
                                        </a>
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <A href=*href attr:class="hover:text-zinc-900 dark:hover:text-white transition-colors">
                                            {*label}
                                        </A>
                                    }
                                    .into_any()
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </footer>
    }
}
