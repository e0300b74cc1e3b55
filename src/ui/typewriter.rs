use leptos::prelude::*;

use crate::core::Typewriter;
use crate::ui::scheduler::Scheduler;

/// Types, holds and deletes each phrase in turn. A single phrase is shown
/// as plain text.
#[component]
pub fn TypewriterText(
    phrases: &'static [&'static str],
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let static_text = match phrases {
        [] => Some(""),
        [only] => Some(*only),
        _ => None,
    };
    let text = RwSignal::new(static_text.unwrap_or_default().to_string());

    if static_text.is_none() {
        let scheduler = Scheduler::new();
        Effect::new(move |_| {
            scheduler.run(Typewriter::new(phrases), move |shown| text.set(shown));
        });
    }

    view! {
        <span class=class aria-label=phrases.first().copied().unwrap_or_default()>
            <span aria-hidden="true">{move || text.get()}</span>
            <span class="typewriter-caret" aria-hidden="true">"|"</span>
        </span>
    }
}
