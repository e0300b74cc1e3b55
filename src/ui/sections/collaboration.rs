use leptos::prelude::*;

use crate::core::content::{COLLABORATION, CollaborationContent};
use crate::core::drag::{InitialPlacement, Position};
use crate::ui::draggable::DraggableNode;
use crate::ui::icon::{Icon, icons};
use crate::ui::presence::PresenceDemo;
use crate::ui::reveal::Reveal;
use crate::ui::sections::heading::SectionHeading;

const NOTE_CARD: &str = "w-40 p-3 rounded-lg border border-zinc-200 dark:border-zinc-700 bg-white \
     dark:bg-zinc-800 text-sm text-zinc-700 dark:text-zinc-200 shadow";

/// Talking points next to a board with simulated live collaborators
#[component]
pub fn Collaboration(#[prop(default = COLLABORATION)] content: CollaborationContent) -> impl IntoView {
    view! {
        <section class="py-24 px-4 bg-zinc-50 dark:bg-zinc-950">
            <div class="max-w-6xl mx-auto">
                <SectionHeading intro=content.intro />

                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <Reveal>
                        <ul class="space-y-6">
                            {content
                                .points
                                .iter()
                                .map(|point| {
                                    view! {
                                        <li class="flex gap-4">
                                            <Icon name=icons::CHAT class="w-6 h-6 shrink-0 mt-1 dark:invert" />
                                            <p class="text-lg text-zinc-700 dark:text-zinc-200">{*point}</p>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </Reveal>

                    <Reveal delay_ms=150>
                        <div class="relative h-80 rounded-2xl border border-zinc-200 dark:border-zinc-800 bg-white dark:bg-zinc-900 bg-dots overflow-hidden">
                            <DraggableNode placement=InitialPlacement::Fixed(Position::new(32.0, 56.0)) clamp=true>
                                <div class=NOTE_CARD>"trip budget"</div>
                            </DraggableNode>
                            <DraggableNode placement=InitialPlacement::Fixed(Position::new(220.0, 170.0)) clamp=true>
                                <div class=NOTE_CARD>"flights + hotels"</div>
                            </DraggableNode>
                            <PresenceDemo comment=content.comment />
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
