//! Click matchers: rapid clicks on the name, double clicks on the logo and
//! modifier clicks on glass panels.

use std::time::Duration;

use crossterm::event::KeyModifiers;

use super::effect::Effect;

/// Clicks needed within the window.
pub const REQUIRED_CLICKS: u32 = 3;
/// Window measured from the first click of a burst.
pub const CLICK_WINDOW: Duration = Duration::from_secs(1);
/// Maximum gap between the two clicks of a double click.
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(500);
/// Prefix of click targets that count as glass panels.
pub const GLASS_PREFIX: &str = "glass:";

/// Fires once when `target` is clicked three times within a second.
#[derive(Debug, Clone)]
pub struct RapidClickMatcher {
    target: String,
    secret: &'static str,
    count: u32,
    burst_start: Option<Duration>,
    found: bool,
}

impl RapidClickMatcher {
    pub fn new(target: &str, secret: &'static str) -> Self {
        Self {
            target: target.to_string(),
            secret,
            count: 0,
            burst_start: None,
            found: false,
        }
    }

    /// Record a click on `target` at time `at`.
    pub fn push(&mut self, target: &str, at: Duration) -> Option<Effect> {
        if self.found || target != self.target {
            return None;
        }

        match self.burst_start {
            Some(start) if at.saturating_sub(start) <= CLICK_WINDOW => {}
            _ => {
                self.burst_start = Some(at);
                self.count = 0;
            }
        }

        self.count += 1;
        if self.count < REQUIRED_CLICKS {
            return None;
        }

        self.found = true;
        self.count = 0;
        self.burst_start = None;
        Some(Effect::SecretFound { name: self.secret })
    }

    /// Whether the secret was already discovered.
    pub fn is_found(&self) -> bool {
        self.found
    }
}

/// Fires `effect` every time `target` receives two clicks in quick
/// succession. A third click starts a new pair.
#[derive(Debug, Clone)]
pub struct DoubleClickMatcher {
    target: String,
    effect: Effect,
    last_click: Option<Duration>,
}

impl DoubleClickMatcher {
    pub fn new(target: &str, effect: Effect) -> Self {
        Self {
            target: target.to_string(),
            effect,
            last_click: None,
        }
    }

    pub fn push(&mut self, target: &str, at: Duration) -> Option<Effect> {
        if target != self.target {
            self.last_click = None;
            return None;
        }

        match self.last_click.take() {
            Some(previous) if at.saturating_sub(previous) <= DOUBLE_CLICK_WINDOW => {
                Some(self.effect.clone())
            }
            _ => {
                self.last_click = Some(at);
                None
            }
        }
    }
}

/// Fires once when a target starting with `prefix` is clicked while
/// `modifiers` are held.
#[derive(Debug, Clone)]
pub struct ModifierClickMatcher {
    prefix: &'static str,
    modifiers: KeyModifiers,
    secret: &'static str,
    found: bool,
}

impl ModifierClickMatcher {
    pub fn new(prefix: &'static str, modifiers: KeyModifiers, secret: &'static str) -> Self {
        Self {
            prefix,
            modifiers,
            secret,
            found: false,
        }
    }

    /// Shift-click on any glass panel.
    pub fn glass_detective() -> Self {
        Self::new(GLASS_PREFIX, KeyModifiers::SHIFT, "Glass Detective")
    }

    pub fn push(&mut self, target: &str, modifiers: KeyModifiers) -> Option<Effect> {
        if self.found || !target.starts_with(self.prefix) || !modifiers.contains(self.modifiers) {
            return None;
        }
        self.found = true;
        Some(Effect::SecretFound { name: self.secret })
    }

    pub fn is_found(&self) -> bool {
        self.found
    }
}
