use std::time::Duration;

use leptos::prelude::*;

use crate::core::content::{FINAL_CTA, FinalCtaContent};
use crate::ui::confetti::{Confetti, ConfettiLayer, use_glow_pulse};
use crate::ui::reveal::Reveal;
use crate::ui::scheduler::Scheduler;

/// Closing call to action. The button pulses, fires confetti on click and
/// then leaves for the app.
#[component]
pub fn FinalCta(#[prop(default = FINAL_CTA)] content: FinalCtaContent) -> impl IntoView {
    let confetti = Confetti::new();
    let glowing = use_glow_pulse();
    let redirect = Scheduler::new();
    let href = content.cta.href;

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        confetti.fire();
        redirect.after(Duration::from_millis(content.redirect_after_ms), move || {
            navigate_to(href);
        });
    };

    view! {
        <section class="relative py-32 px-4 overflow-hidden">
            <ConfettiLayer confetti=confetti />
            <Reveal class="relative max-w-3xl mx-auto text-center">
                <h2 class="font-heading text-4xl sm:text-5xl text-zinc-900 dark:text-white mb-2">
                    {content.heading}
                </h2>
                <p class="font-heading text-3xl text-primary-600 dark:text-primary-400 mb-6">
                    {content.highlight}
                </p>
                <p class="text-lg text-zinc-600 dark:text-zinc-300 mb-10">{content.body}</p>

                <a
                    href=href
                    class="btn-base btn-primary btn-lg cta-glow"
                    class:glowing=move || glowing.get()
                    aria-busy=move || confetti.is_active().to_string()
                    on:click=on_click
                >
                    {content.cta.label}
                </a>
                {content.cta.note.map(|note| view! {
                    <p class="mt-3 text-xs text-zinc-500 dark:text-zinc-400">{note}</p>
                })}
            </Reveal>
        </section>
    }
}

fn navigate_to(href: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        let _ = window().location().set_href(href);
    }

    #[cfg(feature = "ssr")]
    let _ = href;
}
