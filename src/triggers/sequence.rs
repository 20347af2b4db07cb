//! Key-sequence matcher (Konami code).

use std::collections::VecDeque;

use crossterm::event::KeyCode;

use super::effect::Effect;

/// Up Up Down Down Left Right Left Right B A.
pub const KONAMI: [KeyCode; 10] = [
    KeyCode::Up,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Char('b'),
    KeyCode::Char('a'),
];

/// Fires when the most recent keys equal a fixed target sequence.
#[derive(Debug, Clone)]
pub struct KeySequenceMatcher {
    target: Vec<KeyCode>,
    recent: VecDeque<KeyCode>,
    effect: Effect,
}

impl KeySequenceMatcher {
    pub fn new(target: &[KeyCode], effect: Effect) -> Self {
        Self {
            target: target.iter().copied().map(normalize).collect(),
            recent: VecDeque::with_capacity(target.len()),
            effect,
        }
    }

    /// The Konami code matcher.
    pub fn konami() -> Self {
        Self::new(&KONAMI, Effect::Konami)
    }

    /// Record a key press. Returns the effect when the sequence completes.
    ///
    /// The window is cleared after a match so the next run has to start
    /// from scratch.
    pub fn push(&mut self, code: KeyCode) -> Option<Effect> {
        if self.target.is_empty() {
            return None;
        }

        self.recent.push_back(normalize(code));
        while self.recent.len() > self.target.len() {
            self.recent.pop_front();
        }

        if self.recent.len() == self.target.len() && self.recent.iter().eq(self.target.iter()) {
            self.recent.clear();
            return Some(self.effect.clone());
        }
        None
    }

    /// Keys currently in the window.
    pub fn recent(&self) -> impl Iterator<Item = &KeyCode> {
        self.recent.iter()
    }
}

/// Letter keys are matched by physical key, ignoring shift.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}
