//! Effect descriptors and their lifetimes.
//!
//! Matchers never touch the screen. They return an [`Effect`] describing what
//! to show and for how long; the renderer keeps active effects in an
//! [`EffectQueue`] and drops them when they expire.

use std::time::Duration;

use crate::animation::timer::{TimerHandle, TimerQueue};

/// Messages cycled by the "hacker" secret word.
pub const HACKER_MESSAGES: [&str; 4] = [
    "ACCESS GRANTED",
    "SYSTEM BREACH",
    "FIREWALL BYPASSED",
    "ROOT ACCESS",
];

/// Snippets shown by the "code" secret word.
pub const CODE_SNIPPETS: [&str; 3] = [
    "console.log(\"Hello World!\");",
    "if (awesome) { return true; }",
    "const magic = () => \"✨\";",
];

/// Glyphs floated up by the logo double click.
pub const FLOATING_EMOJI: [&str; 5] = ["💖", "⭐", "🚀", "💻", "🎯"];

/// A transient visual effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Rainbow banner for the Konami code
    Konami,
    /// Falling glyphs
    MatrixRain { glyphs: usize },
    /// Green-on-black banner
    HackerText { message: &'static str },
    /// Floating code snippets
    CodeSnippets,
    /// Bouncing JavaScript operators
    JsParticles { count: usize },
    /// Spinning atoms
    ReactLogos { count: usize },
    /// Sparkle burst for a circular pointer gesture
    Sparkles { count: usize },
    /// Hearts, stars and rockets floating up from a double-clicked logo
    FloatingEmoji { count: usize },
    /// Matrix mode switched on or off
    MatrixMode { enabled: bool },
    /// A hidden interaction was discovered
    SecretFound { name: &'static str },
}

impl Effect {
    /// How long the effect stays on screen.
    pub fn duration(&self) -> Duration {
        let secs = match self {
            Effect::Konami => 5,
            Effect::MatrixRain { .. } => 5,
            Effect::HackerText { .. } => 3,
            Effect::CodeSnippets => 3,
            Effect::JsParticles { .. } => 2,
            Effect::ReactLogos { .. } => 3,
            Effect::Sparkles { .. } => 3,
            Effect::FloatingEmoji { .. } => 3,
            Effect::MatrixMode { enabled: true } => 10,
            Effect::MatrixMode { enabled: false } => 0,
            Effect::SecretFound { .. } => 5,
        };
        Duration::from_secs(secs)
    }

    /// Short banner text for the effect.
    pub fn label(&self) -> String {
        match self {
            Effect::Konami => "KONAMI CODE ACTIVATED! Welcome to the Matrix, Neo!".to_string(),
            Effect::MatrixRain { .. } => "matrix rain".to_string(),
            Effect::HackerText { message } => format!("🔓 {message} 🔓"),
            Effect::CodeSnippets => CODE_SNIPPETS.join("  "),
            Effect::JsParticles { .. } => "{} [] () => && || ??".to_string(),
            Effect::ReactLogos { .. } => "⚛️ ⚛️ ⚛️".to_string(),
            Effect::Sparkles { .. } => "✨ nice circle ✨".to_string(),
            Effect::FloatingEmoji { .. } => FLOATING_EMOJI.join(" "),
            Effect::MatrixMode { enabled } => {
                format!("matrix mode {}", if *enabled { "on" } else { "off" })
            }
            Effect::SecretFound { name } => format!("Secret discovered: {name}"),
        }
    }
}

#[derive(Debug)]
struct ActiveEffect {
    id: u64,
    effect: Effect,
    expiry: TimerHandle,
}

/// Active effects with automatic expiry.
#[derive(Debug, Default)]
pub struct EffectQueue {
    timers: TimerQueue<u64>,
    active: Vec<ActiveEffect>,
    next_id: u64,
}

impl EffectQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `effect` for its duration.
    ///
    /// `MatrixMode { enabled: false }` removes any active matrix mode
    /// instead of being shown itself.
    pub fn push(&mut self, effect: Effect) {
        if let Effect::MatrixMode { enabled: false } = effect {
            self.remove_where(|e| matches!(e, Effect::MatrixMode { .. }));
            return;
        }

        let id = self.next_id;
        self.next_id += 1;
        let expiry = self.timers.schedule(effect.duration(), id);
        self.active.push(ActiveEffect { id, effect, expiry });
    }

    /// Advance time; returns effects that expired.
    pub fn advance(&mut self, dt: Duration) -> Vec<Effect> {
        let expired_ids = self.timers.advance(dt);
        let mut expired = Vec::new();
        self.active.retain(|active| {
            if expired_ids.contains(&active.id) {
                expired.push(active.effect.clone());
                false
            } else {
                true
            }
        });
        expired
    }

    fn remove_where(&mut self, predicate: impl Fn(&Effect) -> bool) {
        let timers = &mut self.timers;
        self.active.retain(|active| {
            if predicate(&active.effect) {
                timers.cancel(active.expiry);
                false
            } else {
                true
            }
        });
    }

    /// Active effects, oldest first.
    pub fn active(&self) -> impl Iterator<Item = &Effect> {
        self.active.iter().map(|a| &a.effect)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }
}
