//! Scroll-driven visibility and text animation.
//!
//! Every animation instance owns its own [`TimerQueue`] and is driven by
//! calling `advance(dt)` from a single thread. Reveals within one instance
//! are strictly ordered; independent instances do not coordinate.
//!
//! # Module Structure
//!
//! - [`timer`] - Virtual-clock timer queue with cancellable handles
//! - [`intersection`] - Viewport visibility tracking (fails open)
//! - [`typewriter`] - Character-by-character reveal with simulated typos
//! - [`reveal`] - Staggered per-letter visibility flags
//! - [`section`] - Sections that start animating once visible
//! - [`rotator`] - Fixed-interval carousel index

pub mod intersection;
pub mod reveal;
pub mod rotator;
pub mod section;
pub mod timer;
pub mod typewriter;

pub use intersection::{
    intersection_ratio, ActiveSectionTracker, IntersectionWatcher, ManualViewport, NoViewport,
    ObserverUnavailable, Rect, ViewportObserver, DEFAULT_THRESHOLD,
};
pub use reveal::LetterReveal;
pub use rotator::Rotator;
pub use section::{AnimatedSection, SectionAnimation};
pub use timer::{TimerHandle, TimerQueue};
pub use typewriter::{TypewriterEngine, TypewriterEvent, TypingPace, TypingProfile};
