//! Draggable demo nodes on the hero board
//!
//! Each node owns a [`DragState`]; pointer events feed it and the position is
//! rendered as a CSS transform. Until the user drags a node, resizes of the
//! parent or the window re-run its responsive placement.

use leptos::ev::PointerEvent;
use leptos::html;
use leptos::prelude::*;

use crate::core::content::{BoardNode, NodeMedia, board_nodes};
use crate::core::drag::{DragState, InitialPlacement, Position};

const NODE_CARD: &str = "relative flex flex-col text-left p-3 w-[260px] bg-white dark:bg-gray-800 \
     border border-transparent rounded-lg shadow-sm shadow-gray-400/20 dark:shadow-none \
     hover:shadow-md hover:border-gray-300 dark:hover:border-gray-600 transition";

/// A node that follows the pointer while held
#[component]
pub fn DraggableNode(
    placement: InitialPlacement,
    /// Keep the node inside its parent while dragging
    #[prop(default = false)]
    clamp: bool,
    children: Children,
) -> impl IntoView {
    let state = RwSignal::new(DragState::new(placement));
    let node_ref = NodeRef::<html::Div>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use crate::ui::observer::{hold_until_cleanup, observe_resize, viewport_width};

        let reposition = move || {
            let Some(node) = node_ref.get_untracked() else {
                return;
            };
            let Some(parent) = node.parent_element() else {
                return;
            };
            let parent_width = parent.client_width() as f64;
            let node_width = node.offset_width() as f64;
            state.update(|s| {
                s.reposition(viewport_width(), parent_width, node_width);
            });
        };

        Effect::new(move |_| {
            let Some(node) = node_ref.get() else {
                return;
            };
            request_animation_frame(reposition);

            if let Some(parent) = node.parent_element() {
                if let Some(handle) = observe_resize(&parent, reposition) {
                    hold_until_cleanup(handle);
                }
            }
        });

        let handle_resize = window_event_listener(leptos::ev::resize, move |_| reposition());
        on_cleanup(move || drop(handle_resize));
    }

    let on_pointer_down = move |ev: PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let cursor = Position::new(ev.client_x() as f64, ev.client_y() as f64);
        state.update(|s| s.pointer_down(cursor));

        #[cfg(not(feature = "ssr"))]
        if let Some(node) = node_ref.get_untracked() {
            let _ = node.set_pointer_capture(ev.pointer_id());
        }
    };

    let on_pointer_move = move |ev: PointerEvent| {
        if !state.with_untracked(DragState::is_dragging) {
            return;
        }
        ev.prevent_default();
        let cursor = Position::new(ev.client_x() as f64, ev.client_y() as f64);

        #[cfg(not(feature = "ssr"))]
        let bounds = clamp.then(|| measure_bounds(node_ref)).flatten();
        #[cfg(feature = "ssr")]
        let bounds = {
            let _ = clamp;
            None
        };

        state.update(|s| {
            s.pointer_move(cursor, bounds);
        });
    };

    let on_pointer_up = move |ev: PointerEvent| {
        state.update(DragState::pointer_up);

        #[cfg(not(feature = "ssr"))]
        if let Some(node) = node_ref.get_untracked() {
            let _ = node.release_pointer_capture(ev.pointer_id());
        }
        #[cfg(feature = "ssr")]
        let _ = ev;
    };

    view! {
        <div
            node_ref=node_ref
            class="absolute top-0 left-0 touch-none select-none pointer-events-auto"
            class=("cursor-grab", move || !state.with(DragState::is_dragging))
            class=("cursor-grabbing", move || state.with(DragState::is_dragging))
            style:transform=move || state.with(|s| s.position().to_transform())
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_up
        >
            {children()}
        </div>
    }
}

#[cfg(not(feature = "ssr"))]
fn measure_bounds(node_ref: NodeRef<html::Div>) -> Option<crate::core::drag::Bounds> {
    let node = node_ref.get_untracked()?;
    let parent = node.parent_element()?;
    Some(crate::core::drag::Bounds {
        parent_width: parent.client_width() as f64,
        parent_height: parent.client_height() as f64,
        node_width: node.offset_width() as f64,
        node_height: node.offset_height() as f64,
    })
}

/// The four demo nodes scattered over the hero
#[component]
pub fn DraggableBoard(
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("relative w-full h-full overflow-hidden pointer-events-none {class}")>
            {board_nodes()
                .into_iter()
                .map(|node| {
                    view! {
                        <DraggableNode placement=node.placement>
                            <BoardCard node=node />
                        </DraggableNode>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn BoardCard(node: BoardNode) -> impl IntoView {
    let media = match node.media {
        NodeMedia::Text(text) => view! {
            <div class="text-xs text-gray-600 dark:text-gray-200 mb-2">
                {text}
                {node.footnote.map(|note| view! { <div class="mt-4 font-bold">{note}</div> })}
            </div>
        }
        .into_any(),
        NodeMedia::Image { src, caption, meta } => view! {
            <img
                src=src
                alt=caption
                draggable="false"
                class="w-full h-[160px] rounded-md object-cover pointer-events-none"
            />
            <NodeCaption caption=caption meta=meta />
        }
        .into_any(),
        NodeMedia::Video { src, caption, meta } => view! {
            <video
                src=src
                muted=true
                autoplay=true
                loop=true
                playsinline=true
                class="w-full h-[160px] rounded-md object-cover pointer-events-none"
            />
            <NodeCaption caption=caption meta=meta />
        }
        .into_any(),
    };

    view! {
        <div class=NODE_CARD data-node=node.id>
            {node.title.map(|title| view! {
                <h3 class="text-sm font-medium text-gray-900 dark:text-white mb-1">{title}</h3>
            })}
            {media}
        </div>
    }
}

#[component]
fn NodeCaption(caption: &'static str, meta: &'static str) -> impl IntoView {
    view! {
        <div class="mt-2 min-w-0">
            <div class="text-sm font-medium text-gray-900 dark:text-white truncate">{caption}</div>
            <div class="text-xs text-gray-500 dark:text-gray-400 truncate">{meta}</div>
        </div>
    }
}
