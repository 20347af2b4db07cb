//! Theme configuration for the preview TUI and CLI output
//!
//! Provides ratatui styles for the preview and ANSI escape codes for
//! plain CLI output, plus the mapping from the portfolio's color names.

use ratatui::style::{Color, Modifier, Style};

/// Raw ANSI codes for diff-style output.
pub mod ansi {
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

#[derive(Debug, Clone)]
pub struct Theme {
    /// Body text
    pub text_primary: Color,
    /// Hints and footers
    pub text_secondary: Color,
    /// Headings and the typewriter cursor
    pub accent: Color,
    /// Secondary highlight (active nav entry, quotes)
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::neon()
    }
}

impl Theme {
    /// Dark theme with cyan and purple accents, as on the site.
    pub fn neon() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Cyan,
            highlight: Color::Magenta,
            error: Color::Red,
            success: Color::Green,
            background: Color::Reset,
        }
    }

    /// Green-on-black, used while matrix mode is on.
    pub fn matrix() -> Self {
        Self {
            text_primary: Color::Green,
            text_secondary: Color::DarkGray,
            accent: Color::LightGreen,
            highlight: Color::LightGreen,
            error: Color::Red,
            success: Color::LightGreen,
            background: Color::Black,
        }
    }

    // Style helpers

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.background)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    // ANSI color helpers for CLI output

    pub fn accent_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.accent), text, ansi::RESET)
    }

    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_primary), text, ansi::RESET)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        format!(
            "{}{}{}",
            color_to_ansi(self.text_secondary),
            text,
            ansi::RESET
        )
    }

    pub fn error_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.error), text, ansi::RESET)
    }

    pub fn success_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.success), text, ansi::RESET)
    }
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightGreen => "\x1b[92m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // RGB and indexed colors render uncolored
        _ => "",
    }
}

/// Terminal color for a portfolio color name ("cyan", "purple", ...).
pub fn palette(name: &str) -> Color {
    match name.to_ascii_lowercase().as_str() {
        "cyan" => Color::Cyan,
        "purple" | "violet" => Color::Magenta,
        "pink" => Color::LightMagenta,
        "green" => Color::Green,
        "yellow" | "orange" => Color::Yellow,
        "blue" => Color::Blue,
        "red" => Color::Red,
        _ => Color::White,
    }
}

/// Theme for the current session.
pub fn current_theme() -> Theme {
    Theme::default()
}
