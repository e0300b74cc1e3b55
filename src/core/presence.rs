//! Simulated live collaborators for the collaboration demo
//!
//! Cursors drift along sine/cosine orbits with a little random jitter, and
//! collaborators "join" one by one on a fixed schedule.

use std::time::Duration;

use rand::Rng;
use serde::Serialize;

use super::sequence::{Step, from_offsets};

/// How often cursor positions are recomputed
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Collaborator {
    pub name: &'static str,
    pub color: &'static str,
    pub avatar: &'static str,
}

pub const COLLABORATORS: [Collaborator; 3] = [
    Collaborator {
        name: "Sarah",
        color: "#00CFF5",
        avatar: "S",
    },
    Collaborator {
        name: "Mike",
        color: "#FFDE00",
        avatar: "M",
    },
    Collaborator {
        name: "Alex",
        color: "#FF00A8",
        avatar: "A",
    },
];

/// A rendered cursor, coordinates in percent of the demo board
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CursorSample {
    pub collaborator: Collaborator,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresenceEvent {
    /// Number of collaborators that have joined so far
    Joined(usize),
    ShowComment,
}

/// Staged reveal played once per mount
pub fn join_schedule() -> Vec<Step<PresenceEvent>> {
    from_offsets([
        (1000, PresenceEvent::Joined(1)),
        (2000, PresenceEvent::Joined(2)),
        (3000, PresenceEvent::Joined(3)),
        (4000, PresenceEvent::ShowComment),
    ])
}

/// Number of cursors on screen. The first cursor is visible before
/// anyone has officially joined.
pub fn visible_cursors(joined: usize) -> usize {
    (joined + 1).min(COLLABORATORS.len())
}

/// Jitter-free orbit position for collaborator `index` at `t_ms`
pub fn orbit(t_ms: f64, index: usize) -> (f64, f64) {
    let i = index as f64;
    let x = 50.0 + (t_ms / 1000.0 + i * 2.0).sin() * 30.0;
    let y = 50.0 + (t_ms / 1500.0 + i * 1.5).cos() * 20.0;
    (x, y)
}

/// Cursor positions for the visible collaborators
pub fn cursor_positions<R: Rng>(t_ms: f64, joined: usize, rng: &mut R) -> Vec<CursorSample> {
    COLLABORATORS
        .iter()
        .take(visible_cursors(joined))
        .enumerate()
        .map(|(i, collaborator)| {
            let (x, y) = orbit(t_ms, i);
            CursorSample {
                collaborator: *collaborator,
                x: x + rng.gen_range(0.0..20.0),
                y: y + rng.gen_range(0.0..15.0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_join_schedule() {
        let steps = join_schedule();
        let delays: Vec<_> = steps.iter().map(|s| s.delay.as_millis()).collect();

        assert_eq!(delays, vec![1000, 1000, 1000, 1000]);
        assert_eq!(steps[2].action, PresenceEvent::Joined(3));
        assert_eq!(steps[3].action, PresenceEvent::ShowComment);
    }

    #[test]
    fn test_visible_cursors_capped() {
        assert_eq!(visible_cursors(0), 1);
        assert_eq!(visible_cursors(2), 3);
        assert_eq!(visible_cursors(3), 3);
    }

    #[test]
    fn test_orbit_at_origin() {
        let (x, y) = orbit(0.0, 0);
        assert!((x - 50.0).abs() < 1e-9);
        assert!((y - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_cursor_positions_stay_in_envelope() {
        let mut rng = SmallRng::seed_from_u64(3);
        for step in 0..200 {
            let t = step as f64 * 100.0;
            let cursors = cursor_positions(t, 3, &mut rng);
            assert_eq!(cursors.len(), 3);
            for c in cursors {
                assert!((20.0..100.0).contains(&c.x));
                assert!((30.0..85.0).contains(&c.y));
            }
        }
    }

    #[test]
    fn test_cursor_order_follows_collaborators() {
        let mut rng = SmallRng::seed_from_u64(1);
        let cursors = cursor_positions(0.0, 1, &mut rng);
        let names: Vec<_> = cursors.iter().map(|c| c.collaborator.name).collect();
        assert_eq!(names, vec!["Sarah", "Mike"]);
    }
}
