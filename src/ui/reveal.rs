//! Scroll-triggered reveal
//!
//! Wrap content in [`Reveal`] to fade it in the first time it scrolls into
//! view. The hidden/visible styles live in the stylesheet under `.reveal`.

use leptos::html;
use leptos::prelude::*;

const ROOT_MARGIN: &str = "0px 0px -50px 0px";
const THRESHOLD: f64 = 0.1;

#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional)]
    class: &'static str,
    /// Stagger in milliseconds
    #[prop(default = 0)]
    delay_ms: u32,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let visible = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::ui::observer::{hold_until_cleanup, observe_intersections};

        Effect::new(move |_| {
            let Some(node) = node_ref.get() else {
                return;
            };
            let handle = observe_intersections(
                &[node.into()],
                ROOT_MARGIN,
                THRESHOLD,
                move |entry, observer| {
                    if entry.is_intersecting() {
                        visible.set(true);
                        observer.unobserve(&entry.target());
                    }
                },
            );
            if let Some(handle) = handle {
                hold_until_cleanup(handle);
            }
        });
    }
    #[cfg(feature = "ssr")]
    let _ = (ROOT_MARGIN, THRESHOLD);

    view! {
        <div
            node_ref=node_ref
            class=format!("reveal {class}")
            class:visible=move || visible.get()
            style:transition-delay=format!("{delay_ms}ms")
        >
            {children()}
        </div>
    }
}
