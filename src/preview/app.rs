//! Preview state: the page layout, its animations and the easter eggs.
//!
//! Everything here is driven by `handle_event` and `tick` so it can be
//! exercised without a terminal.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::animation::rotator::DEFAULT_ROTATE_INTERVAL;
use crate::animation::{
    intersection_ratio, ActiveSectionTracker, AnimatedSection, IntersectionWatcher,
    ManualViewport, Rect, Rotator, TypingProfile,
};
use crate::config::Config;
use crate::portfolio::{PortfolioData, ProjectCategory, Quote};
use crate::triggers::clicks::GLASS_PREFIX;
use crate::triggers::set::{LOGO_TARGET, NAME_TARGET};
use crate::triggers::{Effect, EffectQueue, InputEvent, TriggerSet};

use super::state::{InputResult, PreviewOptions};

/// Rows between consecutive page blocks.
const BLOCK_GAP: u16 = 8;
/// Column width used to wrap long paragraphs.
pub const WRAP_WIDTH: usize = 60;
/// Rows scrolled per mouse wheel step.
const WHEEL_ROWS: i32 = 3;

/// A vertical slice of the page.
#[derive(Debug)]
pub struct PageBlock {
    pub id: &'static str,
    pub heading: &'static str,
    /// First page row of the block
    pub top: u16,
    pub height: u16,
    /// Animated lines, top to bottom
    pub animations: Vec<AnimatedSection>,
}

impl PageBlock {
    fn rect(&self) -> Rect {
        Rect::new(0.0, f64::from(self.top), 1.0, f64::from(self.height))
    }
}

#[derive(Debug)]
pub struct PreviewApp {
    // === Page ===
    blocks: Vec<PageBlock>,
    quotes: Vec<Quote>,
    projects: Vec<String>,
    name: String,

    // === Visibility ===
    watcher: IntersectionWatcher<ManualViewport>,
    tracker: ActiveSectionTracker,
    scroll: u16,
    viewport_rows: u16,

    // === Easter eggs ===
    triggers: TriggerSet,
    effects: EffectQueue,
    discovered: Vec<&'static str>,

    // === Timing ===
    rotator: Rotator,
    elapsed: Duration,
    should_quit: bool,
}

impl PreviewApp {
    pub fn new(data: &PortfolioData, config: &Config, options: &PreviewOptions) -> Self {
        let mut config = config.clone();
        if options.no_typos {
            config.typewriter.typo_probability = 0.0;
        }
        let seed = |offset: u64| options.seed.map(|s| s.wrapping_add(offset));

        let mut blocks = Vec::new();
        let mut top = 0;
        let mut push_block = |id, heading, animations: Vec<AnimatedSection>, lines: u16| {
            // Heading row + content + one blank row
            let height = lines.saturating_add(2);
            blocks.push(PageBlock {
                id,
                heading,
                top,
                height,
                animations,
            });
            top = top.saturating_add(height).saturating_add(BLOCK_GAP);
        };

        let personal = &data.personal;
        push_block(
            "hero",
            "Home",
            vec![
                AnimatedSection::typewriter(
                    NAME_TARGET,
                    &personal.name,
                    config.typewriter_engine(TypingProfile::Name, seed(0)),
                ),
                AnimatedSection::reveal("title", &personal.title, config.letter_reveal()),
            ],
            2,
        );

        let bio = wrap(&personal.bio, WRAP_WIDTH);
        let bio_lines = line_count(&bio);
        push_block(
            "about",
            "About",
            vec![AnimatedSection::reveal("bio", &bio, config.letter_reveal())],
            bio_lines,
        );

        let code = data
            .interactive_elements
            .as_ref()
            .and_then(|e| e.code_samples.first())
            .map(|sample| sample.code.clone())
            .unwrap_or_else(|| format!("console.log(\"Hello from {}\");", personal.name));
        let code_lines = line_count(&code);
        push_block(
            "code",
            "Playground",
            vec![AnimatedSection::typewriter(
                "code",
                &code,
                config.typewriter_engine(TypingProfile::Code, seed(1)),
            )],
            code_lines,
        );

        push_block("quotes", "Quotes", Vec::new(), 2);

        let projects = project_lines(data);
        push_block(
            "projects",
            "Projects",
            Vec::new(),
            u16::try_from(projects.len().max(1)).unwrap_or(u16::MAX),
        );

        let mut watcher = IntersectionWatcher::new(ManualViewport::new());
        for block in &blocks {
            watcher.observe(block.id, config.watcher.threshold);
        }

        let quotes = data.quotes().to_vec();
        let rotator = Rotator::new(quotes.len(), DEFAULT_ROTATE_INTERVAL);

        Self {
            blocks,
            quotes,
            projects,
            name: personal.name.clone(),
            watcher,
            tracker: ActiveSectionTracker::new("hero"),
            scroll: 0,
            viewport_rows: 0,
            triggers: TriggerSet::new(NAME_TARGET),
            effects: EffectQueue::new(),
            discovered: Vec::new(),
            rotator,
            elapsed: Duration::ZERO,
            should_quit: false,
        }
    }

    /// Terminal resized; `rows` is the height available to the page.
    pub fn set_viewport(&mut self, rows: u16) {
        self.viewport_rows = rows;
        self.clamp_scroll();
        self.refresh_visibility();
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.scroll).saturating_add(delta).max(0);
        self.scroll = u16::try_from(next).unwrap_or(u16::MAX);
        self.clamp_scroll();
        self.refresh_visibility();
    }

    fn clamp_scroll(&mut self) {
        let max = self.page_height().saturating_sub(self.viewport_rows);
        self.scroll = self.scroll.min(max);
    }

    /// Push block ratios into the watcher and start newly visible blocks.
    fn refresh_visibility(&mut self) {
        if self.viewport_rows == 0 {
            return;
        }
        let viewport = Rect::new(
            0.0,
            f64::from(self.scroll),
            1.0,
            f64::from(self.viewport_rows),
        );

        let mut ratios = Vec::with_capacity(self.blocks.len());
        for block in &mut self.blocks {
            let ratio = intersection_ratio(block.rect(), viewport);
            ratios.push((block.id, ratio));

            if self.watcher.report(block.id, ratio) == Some(true) {
                for animation in &mut block.animations {
                    animation.on_visibility(true);
                }
            }
        }
        self.tracker.update(ratios);
    }

    /// Handle one terminal event.
    pub fn handle_event(&mut self, event: &Event) -> InputResult {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let ctrl_c = key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL);
                let quit = key.code == KeyCode::Esc || ctrl_c;
                if quit {
                    self.should_quit = true;
                    return InputResult::Quit;
                }
                match key.code {
                    KeyCode::Down => self.scroll_by(1),
                    KeyCode::Up => self.scroll_by(-1),
                    KeyCode::PageDown => self.scroll_by(i32::from(self.viewport_rows.max(1))),
                    KeyCode::PageUp => self.scroll_by(-i32::from(self.viewport_rows.max(1))),
                    KeyCode::Tab => self.skip_animations(),
                    KeyCode::F(5) => self.replay(),
                    _ => {}
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => self.scroll_by(WHEEL_ROWS),
                MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_ROWS),
                _ => {}
            },
            Event::Resize(_, rows) => self.set_viewport(rows.saturating_sub(1)),
            _ => {}
        }

        let elapsed = self.elapsed;
        if let Some(input) =
            InputEvent::from_crossterm(event, elapsed, |col, row| self.hit_target(col, row))
        {
            for effect in self.triggers.handle(&input) {
                self.show(effect);
            }
        }
        InputResult::Continue
    }

    fn show(&mut self, effect: Effect) {
        if let Effect::SecretFound { name } = effect {
            if !self.discovered.contains(&name) {
                self.discovered.push(name);
            }
        }
        debug!(effect = %effect.label(), "showing effect");
        self.effects.push(effect);
    }

    /// Advance every clock by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.elapsed += dt;
        for block in &mut self.blocks {
            for animation in &mut block.animations {
                animation.advance(dt);
            }
        }
        for expired in self.effects.advance(dt) {
            self.triggers.effect_expired(&expired);
        }
        self.rotator.advance(dt);
    }

    /// Element id under a screen cell, for click matching.
    ///
    /// The hero heading is the logo and the first hero line holds the name.
    /// Anywhere else inside a block is that block's glass panel.
    pub fn hit_target(&self, column: u16, row: u16) -> Option<String> {
        let page_row = row.checked_add(self.scroll)?;
        let hero = self.blocks.first()?;

        let name_width = u16::try_from(self.name.width()).unwrap_or(u16::MAX);
        if page_row == hero.top.saturating_add(1) && column < name_width {
            return Some(NAME_TARGET.to_string());
        }
        if page_row == hero.top {
            return Some(LOGO_TARGET.to_string());
        }
        self.blocks
            .iter()
            .find(|b| page_row >= b.top && page_row < b.top.saturating_add(b.height))
            .map(|b| format!("{GLASS_PREFIX}{}", b.id))
    }

    fn skip_animations(&mut self) {
        for block in &mut self.blocks {
            for animation in &mut block.animations {
                animation.finish();
            }
        }
    }

    fn replay(&mut self) {
        for block in &mut self.blocks {
            for animation in &mut block.animations {
                animation.replay();
            }
        }
    }

    // === Accessors for rendering ===

    pub fn blocks(&self) -> &[PageBlock] {
        &self.blocks
    }

    pub fn page_height(&self) -> u16 {
        self.blocks
            .last()
            .map(|b| b.top.saturating_add(b.height))
            .unwrap_or(0)
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn active_section(&self) -> Option<&str> {
        self.tracker.active()
    }

    pub fn is_visible(&self, block: &str) -> bool {
        self.watcher.is_visible(block)
    }

    pub fn current_quote(&self) -> Option<&Quote> {
        self.rotator.current().and_then(|i| self.quotes.get(i))
    }

    /// One line per grouped project, by category, featured first.
    pub fn project_lines(&self) -> &[String] {
        &self.projects
    }

    pub fn effects(&self) -> impl Iterator<Item = &Effect> {
        self.effects.active()
    }

    pub fn matrix_mode(&self) -> bool {
        self.triggers.matrix_mode_enabled()
            || self
                .effects
                .active()
                .any(|e| matches!(e, Effect::MatrixRain { .. }))
    }

    pub fn discovered(&self) -> &[&'static str] {
        &self.discovered
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

fn project_lines(data: &PortfolioData) -> Vec<String> {
    ProjectCategory::ALL
        .into_iter()
        .flat_map(|category| {
            data.projects_in(category).into_iter().map(move |project| {
                let star = if project.is_featured() { " ★" } else { "" };
                format!("[{}] {}{}", category.as_str(), project.title, star)
            })
        })
        .collect()
}

/// Rows taken by `text`, at least one, saturating at `u16::MAX`.
fn line_count(text: &str) -> u16 {
    u16::try_from(text.lines().count().max(1)).unwrap_or(u16::MAX)
}

/// Greedy word wrap on `width` display columns.
pub fn wrap(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed =
            current.width() + word.width() + usize::from(!current.is_empty());
        if !current.is_empty() && needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}
