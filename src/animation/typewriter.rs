//! Typewriter engine.
//!
//! Reveals a source string one character at a time with human-like pacing:
//! randomized per-character delay, pauses after spaces and punctuation, and
//! an occasional typo that is typed, held, deleted and corrected. Typos only
//! change the path to the final text, never the text itself.
//!
//! The engine is driven by [`TypewriterEngine::advance`]; every mutation of
//! the visible buffer is reported as a [`TypewriterEvent`].

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::timer::TimerQueue;

/// How long a wrong character stays on screen before it is deleted.
const TYPO_HOLD: Duration = Duration::from_millis(200);
/// Pause between deleting a typo and typing the correct character.
const TYPO_CORRECT: Duration = Duration::from_millis(100);
/// Default chance that an alphabetic character is mistyped first.
pub const DEFAULT_TYPO_PROBABILITY: f64 = 0.05;

const TYPO_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Pacing context for a typewriter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypingProfile {
    /// Slow, deliberate typing for names and headlines
    #[default]
    Name,
    /// Fast typing for code samples
    Code,
}

impl TypingProfile {
    /// Delay table for this profile.
    pub fn pace(self) -> TypingPace {
        match self {
            TypingProfile::Name => TypingPace {
                base_ms: 80,
                jitter_ms: 120,
                space_ms: 60,
                punctuation_ms: 300,
                newline_ms: 300,
                brace_ms: 0,
            },
            TypingProfile::Code => TypingPace {
                base_ms: 10,
                jitter_ms: 100,
                space_ms: 10,
                punctuation_ms: 100,
                newline_ms: 100,
                brace_ms: 50,
            },
        }
    }
}

/// Per-character delay table in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingPace {
    /// Minimum delay after any character
    pub base_ms: u64,
    /// Random extra delay, uniformly drawn from `0..=jitter_ms`
    pub jitter_ms: u64,
    /// Extra pause after a space
    pub space_ms: u64,
    /// Extra pause after `.`, `,`, `;`, `!` or `?`
    pub punctuation_ms: u64,
    /// Extra pause after a newline
    pub newline_ms: u64,
    /// Extra pause after `{` or `}`
    pub brace_ms: u64,
}

impl TypingPace {
    /// Delay to wait after `ch` was typed.
    pub fn delay_after<R: Rng>(&self, ch: char, rng: &mut R) -> Duration {
        let mut ms = self.base_ms + rng.gen_range(0..=self.jitter_ms);
        ms += match ch {
            ' ' => self.space_ms,
            '.' | ',' | ';' | '!' | '?' => self.punctuation_ms,
            '\n' => self.newline_ms,
            '{' | '}' => self.brace_ms,
            _ => 0,
        };
        Duration::from_millis(ms)
    }

    /// Longest delay this pace can produce after a single character.
    pub fn max_delay(&self) -> Duration {
        let extra = self
            .space_ms
            .max(self.punctuation_ms)
            .max(self.newline_ms)
            .max(self.brace_ms);
        Duration::from_millis(self.base_ms + self.jitter_ms + extra)
    }
}

/// A change to the visible buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterEvent {
    /// A correct character was appended
    Typed(char),
    /// A wrong character was appended
    Typo(char),
    /// The wrong character was removed again
    Backspace,
    /// The full text is visible; reported once per run
    Finished,
}

/// Timer payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Type the character at the cursor (or finish at the end)
    Reveal,
    /// Delete the pending typo
    Backspace,
    /// Type the correct character after a typo
    Correct,
}

/// Incrementally reveals a string.
#[derive(Debug)]
pub struct TypewriterEngine {
    profile: TypingProfile,
    typo_probability: f64,
    start_delay: Duration,
    rng: StdRng,
    timers: TimerQueue<Step>,

    // === Run state ===
    /// Source text for the current run
    source: String,
    /// Source characters (indexing by char, not byte)
    chars: Vec<char>,
    /// Visible buffer
    buffer: String,
    /// Number of correct characters revealed so far
    revealed: usize,
    /// Delay to apply once the in-flight typo is corrected
    resume_delay: Option<Duration>,
    running: bool,
    finished: bool,
}

impl TypewriterEngine {
    /// Create an idle engine with an entropy-seeded random source.
    pub fn new(profile: TypingProfile) -> Self {
        Self::with_rng(profile, StdRng::from_entropy())
    }

    /// Create an idle engine with a deterministic random source.
    pub fn with_seed(profile: TypingProfile, seed: u64) -> Self {
        Self::with_rng(profile, StdRng::seed_from_u64(seed))
    }

    fn with_rng(profile: TypingProfile, rng: StdRng) -> Self {
        Self {
            profile,
            typo_probability: DEFAULT_TYPO_PROBABILITY,
            start_delay: Duration::ZERO,
            rng,
            timers: TimerQueue::new(),
            source: String::new(),
            chars: Vec::new(),
            buffer: String::new(),
            revealed: 0,
            resume_delay: None,
            running: false,
            finished: false,
        }
    }

    /// Set the typo probability (clamped to `0.0..=1.0`; 0 disables typos).
    pub fn typo_probability(mut self, probability: f64) -> Self {
        self.typo_probability = if probability.is_finite() {
            probability.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self
    }

    /// Wait this long before the first character of each run.
    pub fn start_delay(mut self, delay: Duration) -> Self {
        self.start_delay = delay;
        self
    }

    /// Start revealing `text` from an empty buffer.
    ///
    /// Any run in progress is stopped first.
    pub fn start(&mut self, text: &str) {
        self.stop();

        self.source = text.to_string();
        self.chars = text.chars().collect();
        self.buffer.clear();
        self.revealed = 0;
        self.resume_delay = None;
        self.finished = false;
        self.running = true;

        debug!(
            profile = ?self.profile,
            chars = self.chars.len(),
            "typewriter started"
        );
        self.timers.schedule(self.start_delay, Step::Reveal);
    }

    /// Cancel all pending timers, keeping the buffer as it is.
    pub fn stop(&mut self) {
        self.timers.cancel_all();
        self.running = false;
    }

    /// Restart the current text from an empty buffer.
    pub fn replay(&mut self) {
        let text = std::mem::take(&mut self.source);
        self.start(&text);
    }

    /// Skip to the full text.
    ///
    /// Returns `Finished` if the run had not finished yet.
    pub fn finish(&mut self) -> Option<TypewriterEvent> {
        self.stop();
        self.buffer.clone_from(&self.source);
        self.revealed = self.chars.len();
        self.resume_delay = None;

        if self.finished {
            None
        } else {
            self.finished = true;
            Some(TypewriterEvent::Finished)
        }
    }

    /// Advance time by `dt`, firing every due step in order.
    pub fn advance(&mut self, dt: Duration) -> Vec<TypewriterEvent> {
        let mut events = Vec::new();
        let deadline = self.timers.deadline_after(dt);

        while let Some(step) = self.timers.pop_until(deadline) {
            self.apply(step, &mut events);
        }
        events
    }

    fn apply(&mut self, step: Step, events: &mut Vec<TypewriterEvent>) {
        match step {
            Step::Reveal => {
                let Some(&ch) = self.chars.get(self.revealed) else {
                    self.complete(events);
                    return;
                };

                let delay = self.profile.pace().delay_after(ch, &mut self.rng);
                if ch.is_ascii_alphabetic() && self.rng.gen_bool(self.typo_probability) {
                    let wrong = self.wrong_letter(ch);
                    self.buffer.push(wrong);
                    self.resume_delay = Some(delay);
                    events.push(TypewriterEvent::Typo(wrong));
                    self.timers.schedule(TYPO_HOLD, Step::Backspace);
                } else {
                    self.type_char(ch, delay, events);
                }
            }
            Step::Backspace => {
                self.buffer.pop();
                events.push(TypewriterEvent::Backspace);
                self.timers.schedule(TYPO_CORRECT, Step::Correct);
            }
            Step::Correct => {
                if let Some(&ch) = self.chars.get(self.revealed) {
                    let delay = self.resume_delay.take().unwrap_or_default();
                    self.type_char(ch, delay, events);
                }
            }
        }
    }

    fn type_char(&mut self, ch: char, delay: Duration, events: &mut Vec<TypewriterEvent>) {
        self.buffer.push(ch);
        self.revealed += 1;
        events.push(TypewriterEvent::Typed(ch));

        if self.revealed == self.chars.len() {
            self.complete(events);
        } else {
            self.timers.schedule(delay, Step::Reveal);
        }
    }

    fn complete(&mut self, events: &mut Vec<TypewriterEvent>) {
        self.running = false;
        if !self.finished {
            self.finished = true;
            debug!(chars = self.chars.len(), "typewriter finished");
            events.push(TypewriterEvent::Finished);
        }
    }

    /// Random lowercase letter different from `ch`.
    fn wrong_letter(&mut self, ch: char) -> char {
        let correct = ch.to_ascii_lowercase() as u8;
        loop {
            let candidate = TYPO_ALPHABET[self.rng.gen_range(0..TYPO_ALPHABET.len())];
            if candidate != correct {
                return candidate as char;
            }
        }
    }

    // === Accessors ===

    /// Currently visible text.
    pub fn visible(&self) -> &str {
        &self.buffer
    }

    /// Source text of the current run.
    pub fn text(&self) -> &str {
        &self.source
    }

    /// Number of correct characters revealed.
    pub fn revealed_index(&self) -> usize {
        self.revealed
    }

    /// Whether timers are still scheduling reveals.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the current run reported `Finished`.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// True while a wrong character is on screen or awaiting correction.
    pub fn is_correcting(&self) -> bool {
        self.resume_delay.is_some()
    }

    pub fn profile(&self) -> TypingProfile {
        self.profile
    }
}
