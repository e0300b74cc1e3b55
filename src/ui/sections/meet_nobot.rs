use leptos::prelude::*;

use crate::core::content::{NOBOT_INTRO, NOBOT_PILLARS, Pillar, SectionIntro};
use crate::ui::sections::heading::{PillarCard, SectionHeading, stagger};

#[component]
pub fn MeetNobot(
    #[prop(default = NOBOT_INTRO)]
    intro: SectionIntro,
    #[prop(default = NOBOT_PILLARS)]
    pillars: &'static [Pillar],
) -> impl IntoView {
    view! {
        <section class="py-24 px-4 bg-zinc-50 dark:bg-zinc-950">
            <div class="max-w-6xl mx-auto">
                <SectionHeading intro=intro />
                <div class="grid md:grid-cols-3 gap-8">
                    {pillars
                        .iter()
                        .enumerate()
                        .map(|(i, pillar)| view! { <PillarCard pillar=*pillar delay_ms=stagger(i) /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
