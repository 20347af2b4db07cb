//! Timed rotation through a list (quote carousel).

use std::time::Duration;

use super::timer::TimerQueue;

/// Default time each quote stays on screen.
pub const DEFAULT_ROTATE_INTERVAL: Duration = Duration::from_secs(8);

/// Cycles an index through `0..len` on a fixed interval, wrapping around.
#[derive(Debug)]
pub struct Rotator {
    len: usize,
    index: usize,
    interval: Duration,
    timers: TimerQueue<()>,
}

impl Rotator {
    /// Create a rotator over `len` items. An empty list never rotates.
    pub fn new(len: usize, interval: Duration) -> Self {
        let mut rotator = Self {
            len,
            index: 0,
            interval,
            timers: TimerQueue::new(),
        };
        if len > 1 && !interval.is_zero() {
            rotator.timers.schedule(interval, ());
        }
        rotator
    }

    /// Advance time; returns true if the current index changed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let deadline = self.timers.deadline_after(dt);
        let mut changed = false;

        while self.timers.pop_until(deadline).is_some() {
            self.index = (self.index + 1) % self.len;
            self.timers.schedule(self.interval, ());
            changed = true;
        }
        changed
    }

    /// Index of the current item, `None` for an empty list.
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
