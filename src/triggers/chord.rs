//! Ctrl+Alt+M matrix-mode toggle.

use crossterm::event::{KeyCode, KeyModifiers};

use super::effect::Effect;

#[derive(Debug, Clone, Default)]
pub struct MatrixModeToggle {
    enabled: bool,
}

impl MatrixModeToggle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press; the chord flips matrix mode.
    pub fn push(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Option<Effect> {
        let chord = modifiers.contains(KeyModifiers::CONTROL | KeyModifiers::ALT);
        if !chord || !matches!(code, KeyCode::Char('m') | KeyCode::Char('M')) {
            return None;
        }

        self.enabled = !self.enabled;
        Some(Effect::MatrixMode {
            enabled: self.enabled,
        })
    }

    /// Sync with the renderer once the timed mode has expired on its own.
    pub fn expire(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
