//! Visibility-gated section animations.
//!
//! A section owns one animation (typewriter or letter reveal) and its source
//! text. Nothing is scheduled until the section is first reported visible;
//! after that the animation runs to completion even if the section scrolls
//! out of view again. Dropping the section drops its pending timers.

use std::time::Duration;

use tracing::debug;

use super::reveal::LetterReveal;
use super::typewriter::{TypewriterEngine, TypewriterEvent};

/// The animation driving a section.
#[derive(Debug)]
pub enum SectionAnimation {
    Typewriter(TypewriterEngine),
    Reveal(LetterReveal),
}

/// A page section with a visibility-gated animation.
#[derive(Debug)]
pub struct AnimatedSection {
    id: String,
    source: String,
    animation: SectionAnimation,
    started: bool,
    finished: bool,
}

impl AnimatedSection {
    /// Section that types `source` with the given engine.
    pub fn typewriter(id: &str, source: &str, engine: TypewriterEngine) -> Self {
        Self::new(id, source, SectionAnimation::Typewriter(engine))
    }

    /// Section that reveals `source` letter by letter.
    pub fn reveal(id: &str, source: &str, sequencer: LetterReveal) -> Self {
        Self::new(id, source, SectionAnimation::Reveal(sequencer))
    }

    fn new(id: &str, source: &str, animation: SectionAnimation) -> Self {
        Self {
            id: id.to_string(),
            source: source.to_string(),
            animation,
            started: false,
            finished: false,
        }
    }

    /// Feed the current visibility.
    ///
    /// Returns true if this call started the animation.
    pub fn on_visibility(&mut self, visible: bool) -> bool {
        if !visible || self.started {
            return false;
        }

        self.started = true;
        debug!(section = %self.id, "section visible, starting animation");
        match &mut self.animation {
            SectionAnimation::Typewriter(engine) => engine.start(&self.source),
            SectionAnimation::Reveal(sequencer) => sequencer.start(&self.source),
        }
        true
    }

    /// Advance the animation. Returns true when the visible state changed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if !self.started {
            return false;
        }

        match &mut self.animation {
            SectionAnimation::Typewriter(engine) => {
                let events = engine.advance(dt);
                if events.contains(&TypewriterEvent::Finished) {
                    self.finished = true;
                }
                !events.is_empty()
            }
            SectionAnimation::Reveal(sequencer) => {
                let changed = !sequencer.advance(dt).is_empty();
                if sequencer.is_complete() {
                    self.finished = true;
                }
                changed
            }
        }
    }

    /// Replace the source text (content reload).
    ///
    /// A started section restarts with the new text; one that has not been
    /// visible yet just remembers it.
    pub fn set_source(&mut self, source: &str) {
        if self.source == source {
            return;
        }
        self.source = source.to_string();
        self.finished = false;

        if self.started {
            match &mut self.animation {
                SectionAnimation::Typewriter(engine) => engine.start(&self.source),
                SectionAnimation::Reveal(sequencer) => {
                    sequencer.set_text(&self.source);
                }
            }
        }
    }

    /// Restart the animation from scratch if it has started.
    pub fn replay(&mut self) {
        if !self.started {
            return;
        }
        self.finished = false;
        match &mut self.animation {
            SectionAnimation::Typewriter(engine) => engine.replay(),
            SectionAnimation::Reveal(sequencer) => sequencer.start(&self.source),
        }
    }

    /// Skip to the end state. A section that was never visible starts first.
    pub fn finish(&mut self) {
        self.on_visibility(true);
        match &mut self.animation {
            SectionAnimation::Typewriter(engine) => {
                engine.finish();
            }
            SectionAnimation::Reveal(sequencer) => sequencer.finish(),
        }
        self.finished = true;
    }

    /// Text as currently displayed; hidden letters render as spaces (line
    /// breaks are kept) so the layout does not shift while revealing.
    pub fn visible_text(&self) -> String {
        if !self.started {
            return String::new();
        }
        match &self.animation {
            SectionAnimation::Typewriter(engine) => engine.visible().to_string(),
            SectionAnimation::Reveal(sequencer) => sequencer
                .letters()
                .map(|(ch, shown)| if shown || ch == '\n' { ch } else { ' ' })
                .collect(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn animation(&self) -> &SectionAnimation {
        &self.animation
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
