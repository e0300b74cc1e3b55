//! Cancellable timers bound to the reactive owner
//!
//! A [`Scheduler`] plays a sequence of [`Step`]s one timeout at a time. Only
//! one timeout is pending per scheduler, and it is cleared when the owning
//! component unmounts or when a new sequence starts. On the server every
//! call is a no-op.

use std::time::Duration;

use leptos::prelude::*;

use crate::core::Step;

/// Milliseconds for the browser timer APIs
pub fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

#[derive(Clone, Copy)]
pub struct Scheduler {
    #[cfg(not(feature = "ssr"))]
    pending: StoredValue<Option<gloo_timers::callback::Timeout>, LocalStorage>,
    /// Bumped on every cancel so a step that restarts its own scheduler
    /// stops the old chain
    #[cfg(not(feature = "ssr"))]
    generation: StoredValue<u64>,
}

impl Scheduler {
    /// Create a scheduler owned by the current component
    pub fn new() -> Self {
        let scheduler = Self {
            #[cfg(not(feature = "ssr"))]
            pending: StoredValue::new_local(None),
            #[cfg(not(feature = "ssr"))]
            generation: StoredValue::new(0),
        };
        on_cleanup(move || scheduler.cancel());
        scheduler
    }

    /// Run `steps` in order, calling `on_step` with each action once its
    /// delay has elapsed. Replaces whatever was running before.
    pub fn run<I, A, F>(&self, steps: I, on_step: F)
    where
        I: IntoIterator<Item = Step<A>>,
        I::IntoIter: 'static,
        A: 'static,
        F: Fn(A) + 'static,
    {
        self.cancel();

        #[cfg(not(feature = "ssr"))]
        schedule_next(
            *self,
            self.generation.get_value(),
            Box::new(steps.into_iter()),
            std::rc::Rc::new(on_step),
        );

        #[cfg(feature = "ssr")]
        let _ = (steps, on_step);
    }

    /// Run a single callback after `delay`
    pub fn after<F>(&self, delay: Duration, callback: F)
    where
        F: FnOnce() + 'static,
    {
        let callback = std::cell::Cell::new(Some(callback));
        self.run([Step::new(delay, ())], move |()| {
            if let Some(callback) = callback.take() {
                callback();
            }
        });
    }

    /// Clear the pending timeout, if any
    pub fn cancel(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            self.generation.try_update_value(|generation| *generation += 1);
            // dropping a gloo Timeout clears it
            self.pending.try_update_value(|pending| pending.take());
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(feature = "ssr"))]
fn schedule_next<A: 'static>(
    scheduler: Scheduler,
    generation: u64,
    mut steps: Box<dyn Iterator<Item = Step<A>>>,
    on_step: std::rc::Rc<dyn Fn(A)>,
) {
    use gloo_timers::callback::Timeout;

    let Some(step) = steps.next() else {
        scheduler.pending.try_update_value(|pending| pending.take());
        return;
    };

    let timeout = Timeout::new(millis(step.delay), move || {
        on_step(step.action);
        if scheduler.generation.try_get_value() == Some(generation) {
            schedule_next(scheduler, generation, steps, on_step);
        }
    });
    scheduler
        .pending
        .try_update_value(|slot| *slot = Some(timeout));
}

/// Call `tick` every `period` until the current component unmounts
pub fn use_interval<F>(period: Duration, tick: F)
where
    F: FnMut() + 'static,
{
    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::callback::Interval;

        let interval = StoredValue::new_local(Some(Interval::new(millis(period), tick)));
        on_cleanup(move || {
            interval.try_update_value(|interval| interval.take());
        });
    }

    #[cfg(feature = "ssr")]
    let _ = (period, tick);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_saturates() {
        assert_eq!(millis(Duration::from_millis(80)), 80);
        assert_eq!(millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}
