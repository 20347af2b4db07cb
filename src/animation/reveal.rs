//! Letter-reveal sequencer for heading effects.
//!
//! Keeps one "shown" flag per character. After an initial delay the flags
//! flip to true left to right on a fixed stagger. Deterministic: no random
//! timing and no backtracking.

use std::time::Duration;

use super::timer::TimerQueue;

/// Default wait before the first letter shows.
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(300);
/// Default interval between consecutive letters.
pub const DEFAULT_STAGGER: Duration = Duration::from_millis(50);

/// Staggered per-character visibility flags.
#[derive(Debug)]
pub struct LetterReveal {
    initial_delay: Duration,
    stagger: Duration,
    text: String,
    shown: Vec<bool>,
    timers: TimerQueue<usize>,
}

impl Default for LetterReveal {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_DELAY, DEFAULT_STAGGER)
    }
}

impl LetterReveal {
    pub fn new(initial_delay: Duration, stagger: Duration) -> Self {
        Self {
            initial_delay,
            stagger,
            text: String::new(),
            shown: Vec::new(),
            timers: TimerQueue::new(),
        }
    }

    /// Reset all flags to hidden for `text` and schedule the reveal.
    pub fn start(&mut self, text: &str) {
        self.timers.cancel_all();
        self.text = text.to_string();
        self.shown = vec![false; text.chars().count()];

        let mut due = self.initial_delay;
        for index in 0..self.shown.len() {
            self.timers.schedule(due, index);
            due += self.stagger;
        }
    }

    /// Restart only if `text` differs from the current one.
    ///
    /// Returns true when a restart happened.
    pub fn set_text(&mut self, text: &str) -> bool {
        if self.text == text && !self.shown.is_empty() {
            return false;
        }
        self.start(text);
        true
    }

    /// Cancel pending flips, keeping the flags as they are.
    pub fn stop(&mut self) {
        self.timers.cancel_all();
    }

    /// Show every letter now and drop pending flips.
    pub fn finish(&mut self) {
        self.timers.cancel_all();
        self.shown.iter_mut().for_each(|flag| *flag = true);
    }

    /// Advance time by `dt`; returns the indexes that turned visible.
    pub fn advance(&mut self, dt: Duration) -> Vec<usize> {
        let revealed = self.timers.advance(dt);
        for &index in &revealed {
            if let Some(flag) = self.shown.get_mut(index) {
                *flag = true;
            }
        }
        revealed
    }

    /// Per-character flags, in text order.
    pub fn shown(&self) -> &[bool] {
        &self.shown
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters shown so far.
    pub fn shown_count(&self) -> usize {
        self.shown.iter().filter(|shown| **shown).count()
    }

    /// True once every flag is set.
    pub fn is_complete(&self) -> bool {
        self.shown.iter().all(|shown| *shown)
    }

    /// Pairs of (character, shown) for rendering.
    pub fn letters(&self) -> impl Iterator<Item = (char, bool)> + '_ {
        self.text.chars().zip(self.shown.iter().copied())
    }

    /// Total time from start until the last letter shows.
    pub fn total_duration(&self) -> Duration {
        match self.shown.len() {
            0 => Duration::ZERO,
            n => self.initial_delay + self.stagger * (n as u32 - 1),
        }
    }
}
