//! Fake multiplayer cursors for the collaboration section

use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::core::presence::{
    COLLABORATORS, CursorSample, PresenceEvent, REFRESH_INTERVAL, cursor_positions, join_schedule,
    orbit, visible_cursors,
};
use crate::ui::scheduler::{Scheduler, use_interval};

/// Cursor positions before the first refresh, without jitter
fn resting_cursors(joined: usize) -> Vec<CursorSample> {
    COLLABORATORS
        .iter()
        .take(visible_cursors(joined))
        .enumerate()
        .map(|(i, collaborator)| {
            let (x, y) = orbit(0.0, i);
            CursorSample {
                collaborator: *collaborator,
                x,
                y,
            }
        })
        .collect()
}

/// Board overlay with drifting collaborator cursors, an avatar stack and a
/// comment bubble that appears once everyone has joined
#[component]
pub fn PresenceDemo(comment: &'static str) -> impl IntoView {
    let joined = RwSignal::new(0_usize);
    let show_comment = RwSignal::new(false);
    let cursors = RwSignal::new(resting_cursors(0));

    let started_at = chrono::Utc::now().timestamp_millis();
    let rng = StoredValue::new(SmallRng::seed_from_u64(started_at.unsigned_abs()));

    let schedule = Scheduler::new();
    Effect::new(move |_| {
        schedule.run(join_schedule(), move |event| match event {
            PresenceEvent::Joined(count) => joined.set(count),
            PresenceEvent::ShowComment => show_comment.set(true),
        });
    });

    use_interval(REFRESH_INTERVAL, move || {
        let t = (chrono::Utc::now().timestamp_millis() - started_at) as f64;
        let count = joined.get_untracked();
        if let Some(samples) = rng.try_update_value(|rng| cursor_positions(t, count, rng)) {
            cursors.set(samples);
        }
    });

    view! {
        <div class="absolute inset-0 pointer-events-none" aria-hidden="true">
            <For
                each=move || cursors.get()
                key=|sample| sample.collaborator.name
                let(sample)
            >
                <PresenceCursor name=sample.collaborator.name color=sample.collaborator.color cursors=cursors />
            </For>

            <div class="absolute top-4 right-4 flex -space-x-2">
                {move || {
                    COLLABORATORS
                        .iter()
                        .take(joined.get())
                        .map(|c| {
                            view! {
                                <span
                                    class="w-8 h-8 rounded-full border-2 border-white dark:border-zinc-900 flex items-center justify-center text-xs font-semibold text-zinc-900"
                                    style:background-color=c.color
                                    title=c.name
                                >
                                    {c.avatar}
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <Show when=move || show_comment.get()>
                <div class="absolute left-[12%] bottom-[14%] max-w-xs rounded-xl bg-white dark:bg-zinc-800 shadow-lg border border-zinc-200 dark:border-zinc-700 p-3 presence-pop">
                    <div class="text-xs font-semibold mb-1" style:color=COLLABORATORS[0].color>
                        {COLLABORATORS[0].name}
                    </div>
                    <p class="text-sm text-zinc-700 dark:text-zinc-200">{comment}</p>
                </div>
            </Show>
        </div>
    }
}

/// One cursor. Reads its own position from the shared sample list so the
/// element is reused across refreshes.
#[component]
fn PresenceCursor(
    name: &'static str,
    color: &'static str,
    cursors: RwSignal<Vec<CursorSample>>,
) -> impl IntoView {
    let position = move || {
        cursors.with(|samples| {
            samples
                .iter()
                .find(|s| s.collaborator.name == name)
                .map(|s| format!("left: {:.2}%; top: {:.2}%;", s.x, s.y))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="absolute transition-all duration-100 ease-linear" style=position>
            <svg class="w-4 h-4" viewBox="0 0 16 16" fill=color>
                <path d="M0 0 L16 6 L9 9 L6 16 Z" />
            </svg>
            <span
                class="ml-3 px-2 py-0.5 rounded text-xs font-medium text-zinc-900 whitespace-nowrap"
                style:background-color=color
            >
                {name}
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resting_cursors_show_first_collaborator() {
        let cursors = resting_cursors(0);
        assert_eq!(cursors.len(), 1);
        assert_eq!(cursors[0].collaborator.name, "Sarah");
        assert_eq!((cursors[0].x, cursors[0].y), orbit(0.0, 0));
    }
}
