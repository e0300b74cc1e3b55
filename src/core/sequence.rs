//! Timed step sequences
//!
//! Staged animations are described as a list of `(delay, action)` steps and
//! handed to a single scheduler per mounted component, so tearing the
//! component down cancels everything that is still pending.

use std::time::Duration;

/// Run `action` after waiting `delay` from the previous step
#[derive(Clone, Debug, PartialEq)]
pub struct Step<A> {
    pub delay: Duration,
    pub action: A,
}

impl<A> Step<A> {
    pub fn new(delay: Duration, action: A) -> Self {
        Self { delay, action }
    }

    pub fn after_ms(ms: u64, action: A) -> Self {
        Self::new(Duration::from_millis(ms), action)
    }
}

/// Build a relative-delay sequence from absolute offsets.
///
/// `[(1000, a), (2000, b)]` becomes `[1000ms a, 1000ms b]`. Offsets must be
/// non-decreasing; a smaller offset is treated as zero delay.
pub fn from_offsets<A>(offsets: impl IntoIterator<Item = (u64, A)>) -> Vec<Step<A>> {
    let mut last = 0;
    offsets
        .into_iter()
        .map(|(at, action)| {
            let delay = at.saturating_sub(last);
            last = last.max(at);
            Step::after_ms(delay, action)
        })
        .collect()
}

/// Total time until the last step fires
pub fn total_duration<A>(steps: &[Step<A>]) -> Duration {
    steps.iter().map(|s| s.delay).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_offsets() {
        let steps = from_offsets([(1000, 'a'), (2000, 'b'), (2000, 'c'), (4000, 'd')]);

        let delays: Vec<_> = steps.iter().map(|s| s.delay.as_millis()).collect();
        assert_eq!(delays, vec![1000, 1000, 0, 2000]);
        assert_eq!(total_duration(&steps), Duration::from_millis(4000));
    }

    #[test]
    fn test_out_of_order_offsets_do_not_go_negative() {
        let steps = from_offsets([(500, 1), (200, 2), (900, 3)]);

        let delays: Vec<_> = steps.iter().map(|s| s.delay.as_millis()).collect();
        assert_eq!(delays, vec![500, 0, 400]);
    }
}
