//! Looping carousel widget
//!
//! Renders the track described by [`LoopingCarousel`] and feeds it button,
//! keyboard, pointer, resize and `transitionend` events. The track is
//! translated in pixels once the viewport has been measured; before that
//! (and on the server) an equivalent CSS `calc()` is used.

use std::time::Duration;

use leptos::ev::{KeyboardEvent, PointerEvent, TransitionEvent};
use leptos::html;
use leptos::prelude::*;

use crate::core::carousel::{KeyAction, LoopingCarousel, key_action, slide_step};
use crate::ui::icon::{Icon, icons};
use crate::ui::scheduler::use_interval;

/// Items shown before the viewport has been measured
const INITIAL_ITEMS_PER_VIEW: usize = 3;

#[component]
pub fn Carousel<T, V>(
    items: &'static [T],
    /// Renders one slide's content
    render: fn(&'static T) -> V,
    /// Accessible name of the carousel region
    label: &'static str,
    /// Gap between slides in px
    #[prop(default = 24.0)]
    gap: f64,
    /// Advance automatically while the pointer is elsewhere
    #[prop(optional)]
    auto_advance: Option<Duration>,
) -> impl IntoView
where
    T: Send + Sync + 'static,
    V: IntoView + 'static,
{
    if items.is_empty() {
        return ().into_any();
    }

    let carousel = RwSignal::new(LoopingCarousel::new(items.len(), INITIAL_ITEMS_PER_VIEW));
    let viewport_width = RwSignal::new(0.0_f64);
    let hovered = RwSignal::new(false);
    let viewport_ref = NodeRef::<html::Div>::new();

    let step = move || {
        slide_step(
            viewport_width.get_untracked(),
            gap,
            carousel.with_untracked(LoopingCarousel::items_per_view),
        )
    };

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::carousel::items_per_view_for_width;
        use crate::ui::observer::{hold_until_cleanup, observe_resize, viewport_width as window_width};

        let apply_layout = move || {
            if let Some(viewport) = viewport_ref.get_untracked() {
                viewport_width.set(viewport.client_width() as f64);
            }
            let per_view = items_per_view_for_width(window_width());
            let changed = carousel
                .try_update(|c| c.set_items_per_view(per_view))
                .unwrap_or(false);
            if changed {
                reenable_after_paint(carousel);
            }
        };

        Effect::new(move |_| {
            let Some(viewport) = viewport_ref.get() else {
                return;
            };
            apply_layout();
            if let Some(handle) = observe_resize(&viewport, apply_layout) {
                hold_until_cleanup(handle);
            }
        });

        let handle_resize = window_event_listener(leptos::ev::resize, move |_| apply_layout());
        on_cleanup(move || drop(handle_resize));
    }

    if let Some(period) = auto_advance {
        use_interval(period, move || {
            if hovered.get_untracked() {
                return;
            }
            carousel.update(|c| {
                if c.can_auto_advance() {
                    c.next();
                }
            });
        });
    }

    let next = move || {
        carousel.update(|c| {
            c.next();
        })
    };
    let prev = move || {
        carousel.update(|c| {
            c.prev();
        })
    };

    let on_transition_end = move |ev: TransitionEvent| {
        if ev.property_name() != "transform" || !is_own_event(&ev) {
            return;
        }
        let jumped = carousel.try_update(LoopingCarousel::transition_end).unwrap_or(false);
        if jumped {
            reenable_after_paint(carousel);
        }
    };

    let on_key_down = move |ev: KeyboardEvent| {
        let Some(action) = key_action(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        match action {
            KeyAction::Next => next(),
            KeyAction::Prev => prev(),
        }
    };

    let on_pointer_down = move |ev: PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let step = step();
        carousel.update(|c| c.drag_start(ev.client_x() as f64, step));
    };

    // Capture waits for the slop so a plain click still reaches links
    // inside the slides.
    let on_pointer_move = move |ev: PointerEvent| {
        if !carousel.with_untracked(LoopingCarousel::is_dragging) {
            return;
        }
        let x = ev.client_x() as f64;
        let step = step();
        carousel.update(|c| {
            c.drag_move(x, step);
        });

        #[cfg(not(feature = "ssr"))]
        if carousel.with_untracked(|c| c.drag_past_slop(x)) {
            if let Some(viewport) = viewport_ref.get_untracked() {
                if !viewport.has_pointer_capture(ev.pointer_id()) {
                    let _ = viewport.set_pointer_capture(ev.pointer_id());
                }
            }
        }
    };

    // Also bound to pointerleave, which only fires before capture starts
    let on_pointer_up = move |ev: PointerEvent| {
        if !carousel.with_untracked(LoopingCarousel::is_dragging) {
            return;
        }
        let step = step();
        carousel.update(|c| {
            c.drag_end(ev.client_x() as f64, step);
        });

        #[cfg(not(feature = "ssr"))]
        if let Some(viewport) = viewport_ref.get_untracked() {
            if viewport.has_pointer_capture(ev.pointer_id()) {
                let _ = viewport.release_pointer_capture(ev.pointer_id());
            }
        }
    };

    let track_transform = move || {
        let width = viewport_width.get();
        carousel.with(|c| {
            if width > 0.0 {
                let step = slide_step(width, gap, c.items_per_view());
                format!("translate3d({}px, 0, 0)", c.live_offset(step))
            } else {
                // step = (100% + gap) / items_per_view
                format!(
                    "translate3d(calc(-{} * (100% + {}px) / {}), 0, 0)",
                    c.current_index(),
                    gap,
                    c.items_per_view()
                )
            }
        })
    };

    let slide_basis = move || {
        let per_view = carousel.with(LoopingCarousel::items_per_view);
        format!(
            "calc((100% - {}px) / {})",
            gap * (per_view as f64 - 1.0),
            per_view
        )
    };

    view! {
        <div
            class="relative"
            role="region"
            aria-roledescription="carousel"
            aria-label=label
            on:pointerenter=move |_| hovered.set(true)
            on:pointerleave=move |_| hovered.set(false)
        >
            <div
                node_ref=viewport_ref
                class="overflow-hidden touch-pan-y select-none cursor-grab focus:outline-none"
                tabindex="0"
                on:keydown=on_key_down
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_up
                on:pointerleave=on_pointer_up
            >
                <div
                    class="flex"
                    class=("transition-transform", move || carousel.with(LoopingCarousel::transition_enabled))
                    class=("duration-500", move || carousel.with(LoopingCarousel::transition_enabled))
                    class=("ease-out", move || carousel.with(LoopingCarousel::transition_enabled))
                    style:column-gap=format!("{gap}px")
                    style:transform=track_transform
                    on:transitionend=on_transition_end
                >
                    <For
                        each=move || carousel.with(LoopingCarousel::displayed_slides)
                        key=|slide| slide.key.clone()
                        let(slide)
                    >
                        <div
                            class="shrink-0 grow-0"
                            style:flex-basis=slide_basis
                            aria-hidden=slide.is_clone.then_some("true")
                            data-key=slide.key.clone()
                        >
                            {render(&items[slide.real_index])}
                        </div>
                    </For>
                </div>
            </div>

            <div class="mt-8 flex items-center justify-center gap-6">
                <button
                    type="button"
                    class="p-2 rounded-full border border-zinc-300 dark:border-zinc-700 hover:bg-zinc-100 dark:hover:bg-zinc-800 transition-colors"
                    aria-label="Previous slide"
                    on:click=move |_| prev()
                >
                    <Icon name=icons::CARET_LEFT class="w-5 h-5 dark:invert" />
                </button>
                <span class="text-sm tabular-nums text-zinc-600 dark:text-zinc-400" aria-live="polite">
                    {move || carousel.with(LoopingCarousel::progress_label)}
                </span>
                <button
                    type="button"
                    class="p-2 rounded-full border border-zinc-300 dark:border-zinc-700 hover:bg-zinc-100 dark:hover:bg-zinc-800 transition-colors"
                    aria-label="Next slide"
                    on:click=move |_| next()
                >
                    <Icon name=icons::CARET_RIGHT class="w-5 h-5 dark:invert" />
                </button>
            </div>
        </div>
    }
    .into_any()
}

/// Transition events bubble up from slide content; only the track counts
fn is_own_event(ev: &TransitionEvent) -> bool {
    match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

/// Turn the track transition back on once the jump without transition has
/// been painted
fn reenable_after_paint(carousel: RwSignal<LoopingCarousel>) {
    request_animation_frame(move || {
        request_animation_frame(move || {
            carousel.try_update(LoopingCarousel::reenable_transition);
        });
    });
}
