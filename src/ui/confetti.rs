use leptos::prelude::*;

use crate::core::confetti::{CLEAR_AFTER, ConfettiPiece, GLOW_DURATION, GLOW_INTERVAL, burst};
use crate::ui::scheduler::{Scheduler, use_interval};

/// Seed for a burst, taken from the wall clock
fn clock_seed() -> u64 {
    chrono::Utc::now().timestamp_millis().unsigned_abs()
}

/// Handle to a confetti layer owned by the current component
#[derive(Clone, Copy)]
pub struct Confetti {
    pieces: RwSignal<Vec<ConfettiPiece>>,
    clear: Scheduler,
}

impl Confetti {
    pub fn new() -> Self {
        Self {
            pieces: RwSignal::new(Vec::new()),
            clear: Scheduler::new(),
        }
    }

    /// Start a new burst, replacing any burst still on screen
    pub fn fire(&self) {
        let pieces = self.pieces;
        pieces.set(burst(clock_seed()));
        self.clear.after(CLEAR_AFTER, move || pieces.set(Vec::new()));
    }

    pub fn is_active(&self) -> bool {
        self.pieces.with(|pieces| !pieces.is_empty())
    }
}

impl Default for Confetti {
    fn default() -> Self {
        Self::new()
    }
}

/// Absolutely positioned layer that renders the current burst
#[component]
pub fn ConfettiLayer(confetti: Confetti) -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none z-20" aria-hidden="true">
            {move || {
                confetti
                    .pieces
                    .get()
                    .into_iter()
                    .map(|piece| {
                        view! {
                            <span class=format!("confetti-piece {}", piece.shape.class()) style=piece.style() />
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Signal that is `true` for [`GLOW_DURATION`] out of every [`GLOW_INTERVAL`]
pub fn use_glow_pulse() -> ReadSignal<bool> {
    let (glowing, set_glowing) = signal(false);
    let fade = Scheduler::new();

    use_interval(GLOW_INTERVAL, move || {
        set_glowing.set(true);
        fade.after(GLOW_DURATION, move || set_glowing.set(false));
    });

    glowing
}
