//! Timer seams.
//!
//! Controllers never talk to the browser clock directly. They own a timer
//! through one of these traits; the browser binding implements them over
//! `setInterval`/`setTimeout` with a fixed callback, and tests use a manual
//! timer that records what was armed.

/// A repeating timer with a fixed callback.
pub trait IntervalTimer {
    /// Arms the timer. Any previously armed interval is replaced.
    fn start(&mut self, period_ms: u32);
    fn stop(&mut self);
}

/// A one-shot timer with a fixed callback.
pub trait OneShotTimer {
    /// Arms the timer. Any pending shot is replaced.
    fn schedule(&mut self, delay_ms: u32);
    fn cancel(&mut self);
}

/// Delays a call until `wait_ms` has passed without another call.
///
/// Each [`Debouncer::call`] replaces the pending arguments and re-arms the
/// timer. When the timer fires, the owner calls [`Debouncer::fire`] and invokes
/// the wrapped function with whatever it returns.
#[derive(Debug)]
pub struct Debouncer<T, A> {
    wait_ms: u32,
    timer: T,
    pending: Option<A>,
}

impl<T: OneShotTimer, A> Debouncer<T, A> {
    pub fn new(wait_ms: u32, timer: T) -> Self {
        Self {
            wait_ms,
            timer,
            pending: None,
        }
    }

    pub fn call(&mut self, args: A) {
        self.pending = Some(args);
        self.timer.cancel();
        self.timer.schedule(self.wait_ms);
    }

    pub fn fire(&mut self) -> Option<A> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ManualTimer;
    use super::*;

    #[test]
    fn debouncer_keeps_only_last_call() {
        let mut d = Debouncer::new(250, ManualTimer::default());
        d.call("a");
        d.call("b");
        d.call("c");
        assert_eq!(d.timer.arms, vec![250, 250, 250]);
        assert_eq!(d.timer.disarms, 2);
        assert!(d.is_pending());

        assert_eq!(d.fire(), Some("c"));
        assert_eq!(d.fire(), None);
        assert!(!d.is_pending());
    }

    #[test]
    fn debouncer_rearms_after_fire() {
        let mut d = Debouncer::new(100, ManualTimer::default());
        d.call(1);
        d.timer.armed = None; // shot consumed
        assert_eq!(d.fire(), Some(1));

        d.call(2);
        assert_eq!(d.timer.armed, Some(100));
        assert_eq!(d.fire(), Some(2));
    }
}
