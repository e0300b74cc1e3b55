use leptos::prelude::*;

use crate::core::content::{Pillar, SectionIntro};
use crate::ui::icon::Icon;
use crate::ui::reveal::Reveal;

/// Centered heading block at the top of a section
#[component]
pub fn SectionHeading(intro: SectionIntro) -> impl IntoView {
    view! {
        <Reveal class="text-center mb-12">
            <h2 class="font-heading text-4xl sm:text-5xl text-zinc-900 dark:text-white mb-4">
                {intro.heading}
            </h2>
            <p class="text-lg text-zinc-600 dark:text-zinc-300 max-w-2xl mx-auto">
                {intro.subheading}
            </p>
        </Reveal>
    }
}

/// Icon card used by the Nobot and Pro sections
#[component]
pub fn PillarCard(
    pillar: Pillar,
    #[prop(default = 0)]
    delay_ms: u32,
) -> impl IntoView {
    view! {
        <Reveal delay_ms=delay_ms class="h-full">
            <div class="h-full p-6 rounded-2xl border border-zinc-200 dark:border-zinc-800 bg-white/70 dark:bg-zinc-900/70">
                <Icon name=pillar.icon class="w-10 h-10 mb-4 dark:invert" />
                <h3 class="font-heading text-xl text-zinc-900 dark:text-white mb-2">{pillar.title}</h3>
                {pillar
                    .lines
                    .iter()
                    .enumerate()
                    .map(|(i, line)| {
                        let class = if i == 0 {
                            "text-sm text-zinc-600 dark:text-zinc-300"
                        } else {
                            "mt-2 text-sm font-semibold text-zinc-900 dark:text-white"
                        };
                        view! { <p class=class>{*line}</p> }
                    })
                    .collect_view()}
            </div>
        </Reveal>
    }
}

/// Stagger for the n-th item of a grid
pub fn stagger(index: usize) -> u32 {
    (index as u32).saturating_mul(100)
}
