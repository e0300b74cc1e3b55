use leptos::prelude::*;

use crate::core::content::{FEATURE_TABS, FEATURE_TABS_INTRO, FeatureTab, SectionIntro};
use crate::ui::common::{TabPanel, Tabs};
use crate::ui::reveal::Reveal;
use crate::ui::sections::heading::SectionHeading;

const ID_PREFIX: &str = "feature";

/// Tabbed feature previews, one looping video per tab
#[component]
pub fn FeatureTabs(
    #[prop(default = FEATURE_TABS_INTRO)]
    intro: SectionIntro,
    #[prop(default = FEATURE_TABS)]
    tabs: &'static [FeatureTab],
) -> impl IntoView {
    let active = RwSignal::new(0_usize);

    view! {
        <section class="py-24 px-4">
            <div class="max-w-5xl mx-auto">
                <SectionHeading intro=intro />

                <Reveal>
                    <Tabs
                        labels=tabs.iter().map(|t| t.title).collect()
                        active=active
                        id_prefix=ID_PREFIX
                        class="flex flex-wrap justify-center gap-2 mb-8"
                    />

                    {tabs
                        .iter()
                        .enumerate()
                        .map(|(index, tab)| {
                            view! {
                                <TabPanel index=index active=active id_prefix=ID_PREFIX>
                                    <p class="text-center text-zinc-600 dark:text-zinc-300 mb-6">
                                        {tab.description}
                                    </p>
                                    <video
                                        class="w-full rounded-2xl border border-zinc-200 dark:border-zinc-800 shadow-xl"
                                        src=tab.video
                                        autoplay=true
                                        muted=true
                                        loop=true
                                        playsinline=true
                                    />
                                </TabPanel>
                            }
                        })
                        .collect_view()}
                </Reveal>
            </div>
        </section>
    }
}
