use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use reelview_core::{ControlKind, OptionControl};

use super::{App, Focus};

/// Render the search box and the year and genre panels, stacked.
pub fn render_filters(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Search box
            Constraint::Percentage(50), // Years
            Constraint::Min(3),         // Genres
        ])
        .split(area);

    render_search(frame, app, chunks[0]);
    render_options(
        frame,
        "Year  [Space] pick  [Enter] filter",
        app.view.year_controls(),
        (app.focus == Focus::Years).then_some(app.year_cursor),
        chunks[1],
    );
    render_options(
        frame,
        "Genre  [Space] toggle  [Enter] filter",
        app.view.genre_controls(),
        (app.focus == Focus::Genres).then_some(app.genre_cursor),
        chunks[2],
    );
}

fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Search;
    let text = if focused {
        format!("{}_", app.view.search_term())
    } else {
        app.view.search_term().to_string()
    };
    let search = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_style(focused))
            .title("Search  [Enter] find"),
    );
    frame.render_widget(search, area);
}

fn render_options(
    frame: &mut Frame,
    title: &str,
    controls: &[OptionControl],
    cursor: Option<usize>,
    area: Rect,
) {
    let lines: Vec<Line<'_>> = controls
        .iter()
        .enumerate()
        .map(|(i, control)| {
            let mark = match (control.kind, control.checked) {
                (ControlKind::Radio, true) => "(\u{2022})",
                (ControlKind::Radio, false) => "( )",
                (ControlKind::Checkbox, true) => "[x]",
                (ControlKind::Checkbox, false) => "[ ]",
            };
            let style = if cursor == Some(i) {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{} {}", mark, control.label()), style))
        })
        .collect();

    // Keep the cursor line visible in short panels
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = cursor
        .map(|c| c.saturating_sub(inner_height.saturating_sub(1)))
        .unwrap_or(0);

    let panel = Paragraph::new(lines)
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(cursor.is_some()))
                .title(title.to_string()),
        );
    frame.render_widget(panel, area);
}

/// Render the status line, falling back to key help.
pub fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if app.status.is_empty() {
        (
            "  Tab Next panel  \u{2191}/k Up  \u{2193}/j Down  Esc Quit".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (format!("  {}", app.status), Style::default().fg(Color::Cyan))
    };
    let status = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}
