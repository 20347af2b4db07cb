//! Secret-word matcher.
//!
//! Keeps the last few typed letters and fires when they contain one of the
//! secret words. The window is cleared on every match, so overlapping
//! windows cannot fire the same word twice.

use super::effect::{Effect, HACKER_MESSAGES};

/// Letters kept in the rolling window.
pub const WORD_WINDOW: usize = 10;

/// Words recognised by default.
pub const SECRET_WORDS: [&str; 5] = ["matrix", "hacker", "code", "javascript", "react"];

#[derive(Debug, Clone)]
pub struct SecretWordMatcher {
    window: String,
    capacity: usize,
    hacker_fired: usize,
}

impl Default for SecretWordMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretWordMatcher {
    pub fn new() -> Self {
        Self {
            window: String::with_capacity(WORD_WINDOW),
            capacity: WORD_WINDOW,
            hacker_fired: 0,
        }
    }

    /// Record a typed character. Non-letters are ignored.
    pub fn push(&mut self, ch: char) -> Option<Effect> {
        if !ch.is_ascii_alphabetic() {
            return None;
        }

        self.window.push(ch.to_ascii_lowercase());
        if self.window.len() > self.capacity {
            // ASCII only, so byte index 0 is a char boundary
            self.window.remove(0);
        }

        let word = SECRET_WORDS
            .iter()
            .find(|word| self.window.contains(*word))?;
        self.window.clear();
        Some(self.effect_for(word))
    }

    fn effect_for(&mut self, word: &str) -> Effect {
        match word {
            "matrix" => Effect::MatrixRain { glyphs: 50 },
            "hacker" => {
                let message = HACKER_MESSAGES[self.hacker_fired % HACKER_MESSAGES.len()];
                self.hacker_fired += 1;
                Effect::HackerText { message }
            }
            "code" => Effect::CodeSnippets,
            "javascript" => Effect::JsParticles { count: 15 },
            _ => Effect::ReactLogos { count: 8 },
        }
    }

    /// Letters currently in the window.
    pub fn window(&self) -> &str {
        &self.window
    }
}
