//! Pitch deck page
//!
//! Ten full-height slides with scroll snapping on the document and a fixed
//! counter that follows the slide crossing the middle of the viewport.

use leptos::html;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::content::{
    DECK_SLIDES, DeckSlide, SlideHighlight, SlideImage, SlideLayout, SlidePlan, slide_counter,
};
use crate::ui::icon::Icon;
use crate::ui::markdown::InlineMarkdown;
use crate::ui::sections::Logo;

/// Styles put on `<html>` while the deck is mounted
const SNAP_STYLES: [(&str, &str); 4] = [
    ("scroll-snap-type", "y mandatory"),
    ("scroll-behavior", "smooth"),
    ("overflow-y", "scroll"),
    ("height", "100%"),
];

/// Only the slide crossing the horizontal midline counts as current
const COUNTER_ROOT_MARGIN: &str = "-50% 0px -50% 0px";

#[component]
pub fn DeckPage() -> impl IntoView {
    let current = RwSignal::new(1_usize);
    let deck_ref = NodeRef::<html::Main>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::web_sys;
        use wasm_bindgen::JsCast;

        use crate::ui::observer::{hold_until_cleanup, observe_intersections};

        apply_snap_styles(true);
        on_cleanup(|| apply_snap_styles(false));

        Effect::new(move |_| {
            let Some(deck) = deck_ref.get() else {
                return;
            };
            let Ok(nodes) = deck.query_selector_all("section[data-slide]") else {
                return;
            };
            let slides: Vec<web_sys::Element> = (0..nodes.length())
                .filter_map(|i| nodes.item(i))
                .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
                .collect();

            let handle = observe_intersections(&slides, COUNTER_ROOT_MARGIN, 0.0, move |entry, _| {
                if !entry.is_intersecting() {
                    return;
                }
                let index = entry
                    .target()
                    .get_attribute("data-slide")
                    .and_then(|value| value.parse::<usize>().ok());
                if let Some(index) = index {
                    current.set(index + 1);
                }
            });
            if let Some(handle) = handle {
                hold_until_cleanup(handle);
            }
        });
    }
    #[cfg(feature = "ssr")]
    let _ = (SNAP_STYLES, COUNTER_ROOT_MARGIN);

    view! {
        <Title text="Nodal - Deck" />
        <Meta name="description" content="Nodal: a visual thinking platform for turning ideas into shareable stories." />

        <main node_ref=deck_ref class="bg-white dark:bg-zinc-950">
            {DECK_SLIDES
                .iter()
                .enumerate()
                .map(|(index, slide)| view! { <Slide index=index slide=*slide /> })
                .collect_view()}
        </main>

        <div
            class="fixed bottom-6 right-6 z-50 px-3 py-1 rounded-full bg-zinc-900/80 text-white text-sm tabular-nums"
            aria-live="polite"
        >
            {move || slide_counter(current.get())}
        </div>
    }
}

#[cfg(not(feature = "ssr"))]
fn apply_snap_styles(enabled: bool) {
    use wasm_bindgen::JsCast;

    let Some(html) = document()
        .document_element()
        .and_then(|el| el.dyn_into::<leptos::web_sys::HtmlElement>().ok())
    else {
        return;
    };
    let style = html.style();
    for (property, value) in SNAP_STYLES {
        if enabled {
            let _ = style.set_property(property, value);
        } else {
            let _ = style.remove_property(property);
        }
    }
}

#[component]
fn Slide(index: usize, slide: DeckSlide) -> impl IntoView {
    let centered = matches!(slide.layout, SlideLayout::Centered);
    let text = view! { <SlideText slide=slide centered=centered /> };

    let content = match slide.layout {
        SlideLayout::Centered => view! {
            <div class="max-w-3xl mx-auto text-center">{text}</div>
        }
        .into_any(),
        SlideLayout::Column => view! {
            <div class="max-w-4xl mx-auto w-full">{text}</div>
        }
        .into_any(),
        SlideLayout::Split { media_first } => {
            let media = view! { <SlideMedia image=slide.image highlights=slide.highlights /> };
            view! {
                <div class="max-w-6xl mx-auto w-full grid md:grid-cols-2 gap-12 items-center">
                    <div class=if media_first { "md:order-2" } else { "" }>{text}</div>
                    <div class=if media_first { "md:order-1" } else { "" }>{media}</div>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <section
            data-slide=index.to_string()
            class="min-h-screen flex items-center px-6 py-16 snap-start snap-always"
        >
            {content}
        </section>
    }
}

#[component]
fn SlideText(slide: DeckSlide, centered: bool) -> impl IntoView {
    view! {
        {slide.show_logo.then(|| view! {
            <div class=if centered { "flex justify-center mb-8" } else { "mb-8" }>
                <Logo class="h-16" />
            </div>
        })}
        {slide.kicker.map(|kicker| view! {
            <span class="text-sm font-semibold uppercase tracking-widest text-primary-600 dark:text-primary-400">
                {kicker}
            </span>
        })}
        {(!slide.heading.is_empty()).then(|| view! {
            <h2 class="font-heading text-4xl sm:text-5xl text-zinc-900 dark:text-white mt-2 mb-6">
                {slide
                    .heading
                    .iter()
                    .enumerate()
                    .map(|(i, line)| view! {
                        {(i > 0).then(|| view! { <br /> })}
                        <InlineMarkdown text=*line />
                    })
                    .collect_view()}
            </h2>
        })}
        {slide
            .body
            .iter()
            .map(|line| view! {
                <p class="text-lg text-zinc-600 dark:text-zinc-300 mb-4">
                    <InlineMarkdown text=*line />
                </p>
            })
            .collect_view()}
        {(!slide.bullets.is_empty()).then(|| view! {
            <ul class="list-disc ml-6 space-y-2 text-lg text-zinc-700 dark:text-zinc-200 text-left">
                {slide
                    .bullets
                    .iter()
                    .map(|bullet| view! { <li><InlineMarkdown text=*bullet /></li> })
                    .collect_view()}
            </ul>
        })}
        {(!slide.plans.is_empty()).then(|| view! { <SlidePlans plans=slide.plans /> })}
        {slide.closing.map(|closing| view! {
            <p class="mt-8 font-heading text-2xl text-zinc-900 dark:text-white">{closing}</p>
        })}
    }
}

#[component]
fn SlideMedia(image: Option<SlideImage>, highlights: &'static [SlideHighlight]) -> impl IntoView {
    view! {
        {image.map(|image| view! {
            <img
                src=image.src
                alt=image.alt
                class="w-full rounded-2xl border border-zinc-200 dark:border-zinc-800 shadow-xl"
                loading="lazy"
            />
        })}
        {(!highlights.is_empty()).then(|| view! {
            <ul class="space-y-4">
                {highlights
                    .iter()
                    .map(|highlight| view! {
                        <li class="flex items-center gap-4 p-4 rounded-xl border border-zinc-200 dark:border-zinc-800">
                            <Icon name=highlight.icon class="w-8 h-8 shrink-0 dark:invert" />
                            <InlineMarkdown
                                text=highlight.text
                                class="text-lg text-zinc-700 dark:text-zinc-200"
                            />
                        </li>
                    })
                    .collect_view()}
            </ul>
        })}
    }
}

#[component]
fn SlidePlans(plans: &'static [SlidePlan]) -> impl IntoView {
    view! {
        <div class="grid sm:grid-cols-2 gap-6 mt-6">
            {plans
                .iter()
                .map(|plan| view! {
                    <div class=format!("p-6 rounded-2xl border-2 {}", plan.accent.border_class())>
                        <h3 class=format!("font-heading text-2xl mb-3 {}", plan.accent.text_class())>
                            {plan.name}
                        </h3>
                        <ul class="space-y-2 text-zinc-700 dark:text-zinc-200">
                            {plan
                                .items
                                .iter()
                                .map(|item| view! { <li><InlineMarkdown text=*item /></li> })
                                .collect_view()}
                        </ul>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
