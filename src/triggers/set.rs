//! Fan-out of one input stream to every matcher.

use tracing::debug;

use super::chord::MatrixModeToggle;
use super::clicks::{DoubleClickMatcher, ModifierClickMatcher, RapidClickMatcher};
use super::effect::Effect;
use super::gesture::CircleGestureMatcher;
use super::sequence::KeySequenceMatcher;
use super::words::SecretWordMatcher;
use super::InputEvent;

/// Click target that hides the "Name Clicker" secret.
pub const NAME_TARGET: &str = "name";
/// Click target of the site logo.
pub const LOGO_TARGET: &str = "logo";

/// Every easter-egg matcher, each with its own private buffer.
#[derive(Debug, Clone)]
pub struct TriggerSet {
    // === Keyboard ===
    konami: KeySequenceMatcher,
    words: SecretWordMatcher,
    matrix_mode: MatrixModeToggle,

    // === Pointer ===
    gesture: CircleGestureMatcher,
    name_clicks: RapidClickMatcher,
    logo_clicks: DoubleClickMatcher,
    glass_clicks: ModifierClickMatcher,
}

impl Default for TriggerSet {
    fn default() -> Self {
        Self::new(NAME_TARGET)
    }
}

impl TriggerSet {
    /// Create the full set; `name_target` is the element id of the name heading.
    pub fn new(name_target: &str) -> Self {
        Self {
            konami: KeySequenceMatcher::konami(),
            words: SecretWordMatcher::new(),
            matrix_mode: MatrixModeToggle::new(),
            gesture: CircleGestureMatcher::new(),
            name_clicks: RapidClickMatcher::new(name_target, "Name Clicker"),
            logo_clicks: DoubleClickMatcher::new(
                LOGO_TARGET,
                Effect::FloatingEmoji { count: 20 },
            ),
            glass_clicks: ModifierClickMatcher::glass_detective(),
        }
    }

    /// Feed one event to every interested matcher and collect what fired.
    pub fn handle(&mut self, event: &InputEvent) -> Vec<Effect> {
        let mut fired = Vec::new();

        match event {
            InputEvent::Key { code, modifiers } => {
                // A chord is not typing; keep it out of the other buffers
                if let Some(effect) = self.matrix_mode.push(*code, *modifiers) {
                    fired.push(effect);
                } else {
                    fired.extend(self.konami.push(*code));
                    if let Some(ch) = event.typed_char() {
                        fired.extend(self.words.push(ch));
                    }
                }
            }
            InputEvent::PointerMove(point) => fired.extend(self.gesture.push(*point)),
            InputEvent::Click {
                target,
                at,
                modifiers,
            } => {
                fired.extend(self.name_clicks.push(target, *at));
                fired.extend(self.logo_clicks.push(target, *at));
                fired.extend(self.glass_clicks.push(target, *modifiers));
            }
        }

        for effect in &fired {
            debug!(effect = ?effect, "trigger fired");
        }
        fired
    }

    /// Report that an effect ran out so stateful toggles stay in sync.
    pub fn effect_expired(&mut self, effect: &Effect) {
        if let Effect::MatrixMode { enabled: true } = effect {
            self.matrix_mode.expire();
        }
    }

    pub fn matrix_mode_enabled(&self) -> bool {
        self.matrix_mode.is_enabled()
    }
}
