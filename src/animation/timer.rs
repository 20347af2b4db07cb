//! Cooperative timer queue.
//!
//! Each animation instance owns one `TimerQueue`. Time is virtual: the owner
//! advances the clock explicitly, and due entries are released one at a time
//! in (due time, insertion) order. Releasing an entry moves the clock to its
//! due time, so anything scheduled while handling it is relative to the
//! moment it fired, not to the end of the advance.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle returned by [`TimerQueue::schedule`], used to cancel the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Virtual-clock queue of pending timers carrying a payload each.
#[derive(Debug)]
pub struct TimerQueue<T> {
    /// Current virtual time since the queue was created
    now: Duration,
    /// Sequence number for the next scheduled entry (tie breaker)
    next_seq: u64,
    /// Pending entries keyed by (due time, sequence)
    pending: BTreeMap<(Duration, u64), T>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Create an empty queue with the clock at zero.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            pending: BTreeMap::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `payload` to fire `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, payload: T) -> TimerHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.insert((self.now + delay, seq), payload);
        TimerHandle(seq)
    }

    /// Cancel a pending entry.
    ///
    /// Returns false if the entry already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let key = self
            .pending
            .keys()
            .find(|(_, seq)| *seq == handle.0)
            .copied();

        match key {
            Some(key) => self.pending.remove(&key).is_some(),
            None => false,
        }
    }

    /// Cancel every pending entry.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Number of pending entries.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True when nothing is scheduled.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Due time of the earliest pending entry.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(due, _)| *due)
    }

    /// Release the earliest entry if it is due at or before `deadline`.
    ///
    /// On release the clock moves to the entry's due time (never backwards).
    /// When nothing is due the clock moves to `deadline` and `None` is
    /// returned, which ends the caller's drain loop.
    pub fn pop_until(&mut self, deadline: Duration) -> Option<T> {
        match self.pending.first_key_value() {
            Some((&(due, seq), _)) if due <= deadline => {
                self.now = self.now.max(due);
                self.pending.remove(&(due, seq))
            }
            _ => {
                self.now = self.now.max(deadline);
                None
            }
        }
    }

    /// Deadline `dt` after the current time, for use with [`Self::pop_until`].
    pub fn deadline_after(&self, dt: Duration) -> Duration {
        self.now + dt
    }

    /// Advance the clock by `dt` and return every payload that became due,
    /// in firing order.
    ///
    /// Only suitable when handling a payload never schedules new entries;
    /// otherwise drain with [`Self::pop_until`].
    pub fn advance(&mut self, dt: Duration) -> Vec<T> {
        let deadline = self.deadline_after(dt);
        let mut fired = Vec::new();
        while let Some(payload) = self.pop_until(deadline) {
            fired.push(payload);
        }
        fired
    }
}
