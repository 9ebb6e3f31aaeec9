//! Hero slideshow state machine.
//!
//! States are slide indices `0..count`. The interval timer advances by one
//! (wrapping); a manual jump stops the timer and starts a fresh interval so a
//! pending auto-advance cannot immediately undo it.

use thiserror::Error;

use crate::timer::IntervalTimer;

pub const DEFAULT_INTERVAL_MS: u32 = 5000;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SlideshowError {
    #[error("slide index {index} out of range (slide count {count})")]
    OutOfRange { index: usize, count: usize },
}

/// Which slide lost and which gained the active mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    pub previous: usize,
    pub current: usize,
}

#[derive(Debug)]
pub struct Slideshow<T> {
    current: usize,
    count: usize,
    interval_ms: u32,
    timer: T,
}

impl<T: IntervalTimer> Slideshow<T> {
    /// `None` when there are no slides; the controller then does nothing.
    pub fn new(count: usize, interval_ms: u32, timer: T) -> Option<Self> {
        if count == 0 {
            return None;
        }
        Some(Self {
            current: 0,
            count,
            interval_ms,
            timer,
        })
    }

    /// Starts auto-advance. Slide 0 is active from construction.
    pub fn start(&mut self) {
        self.timer.start(self.interval_ms);
    }

    pub fn stop(&mut self) {
        self.timer.stop();
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Timer tick: advance by one, wrapping.
    pub fn next(&mut self) -> SlideChange {
        let previous = self.current;
        self.current = (self.current + 1) % self.count;
        SlideChange {
            previous,
            current: self.current,
        }
    }

    /// Manual jump. Restarts the auto-advance countdown.
    pub fn go_to(&mut self, index: usize) -> Result<SlideChange, SlideshowError> {
        if index >= self.count {
            return Err(SlideshowError::OutOfRange {
                index,
                count: self.count,
            });
        }
        let previous = self.current;
        self.current = index;
        self.timer.stop();
        self.timer.start(self.interval_ms);
        Ok(SlideChange {
            previous,
            current: index,
        })
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::testing::ManualTimer;

    fn show(count: usize) -> Slideshow<ManualTimer> {
        let mut s = Slideshow::new(count, DEFAULT_INTERVAL_MS, ManualTimer::default())
            .expect("non-empty slideshow");
        s.start();
        s
    }

    #[test]
    fn no_slides_means_no_slideshow() {
        assert!(Slideshow::new(0, DEFAULT_INTERVAL_MS, ManualTimer::default()).is_none());
    }

    #[test]
    fn starts_on_first_slide_with_interval_armed() {
        let s = show(3);
        assert_eq!(s.current(), 0);
        assert_eq!(s.timer().armed, Some(5000));
    }

    #[test]
    fn ticks_advance_by_one_and_wrap() {
        let mut s = show(3);
        let seen: Vec<usize> = (0..7).map(|_| s.next().current).collect();
        assert_eq!(seen, vec![1, 2, 0, 1, 2, 0, 1]);
        for _ in 0..20 {
            let change = s.next();
            assert!(change.current < 3);
            assert_eq!(change.current, (change.previous + 1) % 3);
        }
        // Ticks never touch the timer.
        assert_eq!(s.timer().arms.len(), 1);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut s = show(1);
        assert_eq!(s.next(), SlideChange { previous: 0, current: 0 });
    }

    #[test]
    fn go_to_jumps_and_restarts_countdown() {
        let mut s = show(4);
        s.next();
        let change = s.go_to(3).expect("in range");
        assert_eq!(change, SlideChange { previous: 1, current: 3 });
        assert_eq!(s.current(), 3);
        assert_eq!(s.timer().disarms, 1);
        assert_eq!(s.timer().arms, vec![5000, 5000]);
        assert_eq!(s.timer().armed, Some(5000));

        assert_eq!(s.next().current, 0);
    }

    #[test]
    fn go_to_out_of_range_is_rejected_without_side_effects() {
        let mut s = show(2);
        assert_eq!(
            s.go_to(2),
            Err(SlideshowError::OutOfRange { index: 2, count: 2 })
        );
        assert_eq!(s.current(), 0);
        assert_eq!(s.timer().arms.len(), 1);
    }
}
