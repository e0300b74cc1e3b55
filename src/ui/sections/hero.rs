use leptos::prelude::*;

use crate::core::content::{HOME_HERO, HeroContent};
use crate::ui::common::{ButtonSize, ButtonVariant, CtaLink};
use crate::ui::draggable::DraggableBoard;
use crate::ui::typewriter::TypewriterText;

/// Logo mark plus wordmark
#[component]
pub fn Logo(
    #[prop(default = "h-10")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <img src="/nodal-logo.svg" alt="Nodal" class=format!("{class} w-auto dark:invert") />
    }
}

/// Hero with the typewriter tagline and the draggable demo board behind the copy
#[component]
pub fn Hero(#[prop(default = HOME_HERO)] content: HeroContent) -> impl IntoView {
    view! {
        <section class="relative overflow-hidden bg-dots">
            <DraggableBoard class="absolute inset-0 z-10" />

            <div class="relative max-w-3xl mx-auto px-4 pt-40 pb-12 md:pb-24 text-center min-h-[1240px] md:min-h-[860px]">
                <div class="relative z-20 pointer-events-none">
                    <div class="flex flex-wrap items-baseline justify-center gap-x-3 mb-8">
                        <Logo class="h-12" />
                        <TypewriterText
                            phrases=content.tagline_phrases
                            class="font-heading text-2xl sm:text-3xl text-zinc-700 dark:text-zinc-200"
                        />
                    </div>

                    <h1 class="font-heading text-3xl sm:text-4xl text-zinc-900 dark:text-white mb-6">
                        {content.headline}
                    </h1>
                    {content
                        .paragraphs
                        .iter()
                        .map(|p| view! { <p class="text-lg text-zinc-600 dark:text-zinc-300 mb-4">{*p}</p> })
                        .collect_view()}

                    <div class="mt-10 flex flex-col sm:flex-row items-center justify-center gap-6 pointer-events-auto">
                        <CtaLink cta=content.primary_cta size=ButtonSize::Large />
                        <CtaLink
                            cta=content.secondary_cta
                            variant=ButtonVariant::Secondary
                            size=ButtonSize::Large
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
