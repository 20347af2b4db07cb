//! Easter-egg trigger matchers.
//!
//! Each matcher keeps a private rolling buffer over the global input stream
//! and returns an [`Effect`] descriptor when its pattern completes.
//! [`TriggerSet`] fans one [`InputEvent`] out to all of them.

pub mod chord;
pub mod clicks;
pub mod effect;
pub mod gesture;
pub mod sequence;
pub mod set;
pub mod words;

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

pub use chord::MatrixModeToggle;
pub use clicks::{DoubleClickMatcher, ModifierClickMatcher, RapidClickMatcher};
pub use effect::{Effect, EffectQueue};
pub use gesture::{CircleGestureMatcher, Point};
pub use sequence::KeySequenceMatcher;
pub use set::TriggerSet;
pub use words::SecretWordMatcher;

/// Approximate pixel size of one terminal cell, used to scale mouse positions.
pub const CELL_WIDTH_PX: f64 = 8.0;
pub const CELL_HEIGHT_PX: f64 = 16.0;

/// One item of the global input stream.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A physical key press
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Pointer position in viewport pixels
    PointerMove(Point),
    /// A click on a named element at a point in time
    Click {
        target: String,
        at: Duration,
        modifiers: KeyModifiers,
    },
}

impl InputEvent {
    /// Convert a crossterm event. Clicks are resolved to a target by `hit`,
    /// which maps a (column, row) cell to an element id.
    pub fn from_crossterm<F>(event: &Event, at: Duration, hit: F) -> Option<Self>
    where
        F: Fn(u16, u16) -> Option<String>,
    {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(InputEvent::Key {
                code: key.code,
                modifiers: key.modifiers,
            }),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    Some(InputEvent::PointerMove(Point::new(
                        f64::from(mouse.column) * CELL_WIDTH_PX,
                        f64::from(mouse.row) * CELL_HEIGHT_PX,
                    )))
                }
                MouseEventKind::Down(MouseButton::Left) => {
                    hit(mouse.column, mouse.row).map(|target| InputEvent::Click {
                        target,
                        at,
                        modifiers: mouse.modifiers,
                    })
                }
                _ => None,
            },
            _ => None,
        }
    }

    /// The printable character for a plain (or shifted) key press.
    pub fn typed_char(&self) -> Option<char> {
        match self {
            InputEvent::Key {
                code: KeyCode::Char(c),
                modifiers,
            } if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => Some(*c),
            _ => None,
        }
    }
}
