//! Terminal preview of the portfolio page.
//!
//! Renders the page as scrollable text and runs the animation layer against
//! real time and real keyboard/mouse input, so the typewriter, letter reveal
//! and easter eggs can be tried without a browser.
//!
//! # Architecture
//!
//! - `state`: shared types (`InputResult`, `PreviewOptions`)
//! - `app`: page layout, visibility and trigger state
//! - `ui`: ratatui rendering

pub mod app;
pub mod state;
pub mod ui;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::portfolio::PortfolioData;

pub use app::PreviewApp;
pub use state::{InputResult, PreviewOptions};

/// Frame interval.
const TICK: Duration = Duration::from_millis(16);

/// Restores the terminal when dropped, including on early returns.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Run the preview until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn run_preview(data: &PortfolioData, config: &Config, options: &PreviewOptions) -> Result<()> {
    let mut guard = TerminalGuard::new()?;
    let mut app = PreviewApp::new(data, config, options);

    let size = guard.terminal.size()?;
    app.set_viewport(size.height.saturating_sub(1));

    let mut last = Instant::now();
    while !app.should_quit() {
        guard.terminal.draw(|frame| ui::render(frame, &app))?;

        if event::poll(TICK)? {
            let event = event::read()?;
            if app.handle_event(&event) == InputResult::Quit {
                break;
            }
        }

        let now = Instant::now();
        app.tick(now - last);
        last = now;
    }
    Ok(())
}
