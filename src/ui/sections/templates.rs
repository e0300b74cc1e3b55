use std::time::Duration;

use leptos::prelude::*;

use crate::core::content::{SectionIntro, TEMPLATES, TEMPLATES_INTRO, Template, links};
use crate::ui::carousel::Carousel;
use crate::ui::icon::{Icon, icons};
use crate::ui::sections::heading::SectionHeading;

const AUTO_ADVANCE: Duration = Duration::from_secs(5);

/// Starter boards in a looping carousel
#[component]
pub fn Templates(
    #[prop(default = TEMPLATES_INTRO)]
    intro: SectionIntro,
    #[prop(default = TEMPLATES)]
    templates: &'static [Template],
) -> impl IntoView {
    view! {
        <section class="py-24 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeading intro=intro />
                <Carousel
                    items=templates
                    render=template_card
                    label="Board templates"
                    auto_advance=AUTO_ADVANCE
                />
            </div>
        </section>
    }
}

fn template_card(template: &'static Template) -> impl IntoView {
    let accent = template.accent;

    view! {
        <article class=format!(
            "h-full flex flex-col p-6 rounded-2xl border-2 bg-white dark:bg-zinc-900 transition-colors {}",
            accent.border_class(),
        )>
            <div class=format!(
                "w-12 h-12 rounded-xl flex items-center justify-center mb-4 {}",
                accent.bg_class(),
            )>
                <Icon name=template.icon class="w-6 h-6" />
            </div>
            <span class=format!("text-xs font-semibold uppercase tracking-wide {}", accent.text_class())>
                {template.subtitle}
            </span>
            <h3 class="font-heading text-2xl text-zinc-900 dark:text-white mt-1 mb-2">{template.title}</h3>
            <p class="text-sm text-zinc-600 dark:text-zinc-300 mb-4">{template.description}</p>
            <ul class="space-y-2 mb-6">
                {template
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="flex items-center gap-2 text-sm text-zinc-700 dark:text-zinc-200">
                                <Icon name=icons::CHECK class="w-4 h-4 dark:invert" />
                                {*feature}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <a
                href=links::APP
                target="_blank"
                rel="noopener noreferrer"
                class="mt-auto btn-base btn-secondary text-center"
                draggable="false"
            >
                "Use template"
            </a>
        </article>
    }
}
