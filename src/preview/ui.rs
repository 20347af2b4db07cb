//! Rendering for the preview.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::animation::SectionAnimation;
use crate::theme::{palette, Theme};

use super::app::PreviewApp;

const CURSOR: char = '▌';

/// Draw the whole preview.
pub fn render(frame: &mut Frame, app: &PreviewApp) {
    let theme = if app.matrix_mode() {
        Theme::matrix()
    } else {
        Theme::default()
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    let page = Paragraph::new(page_lines(app, &theme))
        .style(theme.text_style())
        .scroll((app.scroll(), 0));
    frame.render_widget(page, chunks[0]);
    frame.render_widget(Paragraph::new(footer_line(app, &theme)), chunks[1]);

    render_effects(frame, app, &theme);
}

/// Every page row, top to bottom.
pub fn page_lines<'a>(app: &'a PreviewApp, theme: &Theme) -> Vec<Line<'a>> {
    let mut rows: Vec<Line> = vec![Line::default(); app.page_height() as usize];

    for block in app.blocks() {
        let top = block.top as usize;
        if let Some(row) = rows.get_mut(top) {
            *row = Line::from(Span::styled(
                format!("── {} ──", block.heading),
                theme.accent_bold_style(),
            ));
        }

        let mut content: Vec<Line> = Vec::new();
        for animation in &block.animations {
            let mut text = animation.visible_text();
            let typing = matches!(animation.animation(), SectionAnimation::Typewriter(_));
            if typing && animation.is_started() && !animation.is_finished() {
                text.push(CURSOR);
            }
            content.extend(text.lines().map(|l| Line::from(l.to_string())));
            if text.is_empty() {
                content.push(Line::default());
            }
        }

        match block.id {
            "quotes" => content = quote_lines(app, theme),
            "projects" => content = project_lines(app, theme),
            _ => {}
        }

        let last = (top + block.height as usize)
            .saturating_sub(1)
            .min(rows.len());
        for (offset, line) in content.into_iter().enumerate() {
            let row = top + 1 + offset;
            if row < last {
                rows[row] = line;
            }
        }
    }
    rows
}

fn quote_lines<'a>(app: &'a PreviewApp, theme: &Theme) -> Vec<Line<'a>> {
    match app.current_quote() {
        Some(quote) => vec![
            Line::from(Span::styled(
                format!("\"{}\"", quote.text),
                Style::default().fg(palette(&quote.color)),
            )),
            Line::from(Span::styled(
                format!("  - {}", quote.author),
                theme.text_secondary_style(),
            )),
        ],
        None => vec![Line::from(Span::styled(
            "No quotes yet",
            theme.text_secondary_style(),
        ))],
    }
}

fn project_lines<'a>(app: &'a PreviewApp, theme: &Theme) -> Vec<Line<'a>> {
    if app.project_lines().is_empty() {
        return vec![Line::from(Span::styled(
            "No projects yet",
            theme.text_secondary_style(),
        ))];
    }
    app.project_lines()
        .iter()
        .map(|line| Line::from(line.as_str()))
        .collect()
}

fn footer_line<'a>(app: &'a PreviewApp, theme: &Theme) -> Line<'a> {
    let mut spans = Vec::new();
    for block in app.blocks() {
        let style = if app.active_section() == Some(block.id) {
            theme.highlight_style()
        } else {
            theme.text_secondary_style()
        };
        spans.push(Span::styled(format!(" {} ", block.heading), style));
    }
    spans.push(Span::styled(
        "  ↑↓ scroll  tab skip  f5 replay  esc quit",
        theme.text_secondary_style(),
    ));
    if !app.discovered().is_empty() {
        spans.push(Span::styled(
            format!("  secrets: {}", app.discovered().len()),
            theme.success_style(),
        ));
    }
    Line::from(spans)
}

fn render_effects(frame: &mut Frame, app: &PreviewApp, theme: &Theme) {
    let labels: Vec<Line> = app
        .effects()
        .map(|effect| Line::from(Span::styled(effect.label(), theme.highlight_style())))
        .collect();
    if labels.is_empty() {
        return;
    }

    let area = centered_rect(70, 40, frame.area());
    let popup = Paragraph::new(labels)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.accent_style()),
        );
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

/// Centered sub-rectangle taking the given percentages of `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
