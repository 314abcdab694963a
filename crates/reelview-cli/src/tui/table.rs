use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use super::{App, Focus};

/// Render the movie table, highlighted rows included.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from("#").style(Style::default().fg(Color::DarkGray)),
        Cell::from("Title").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Genre"),
        Cell::from("Year"),
        Cell::from("Poster"),
    ])
    .height(1);

    // area.height - 2 for borders - 1 for header
    let viewport_height = (area.height.saturating_sub(3)) as usize;
    let rows = app.view.rows();
    let visible_start = app.table_offset.min(rows.len().saturating_sub(1));
    let visible_end = (visible_start + viewport_height).min(rows.len());

    let table_rows: Vec<Row> = rows
        .iter()
        .skip(visible_start)
        .take(viewport_height)
        .map(|row| {
            let style = if row.highlighted {
                Style::default().bg(Color::Yellow).fg(Color::Black)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(row.key.to_string()),
                Cell::from(row.title.clone()),
                Cell::from(row.genre.clone()),
                Cell::from(row.year.clone()),
                Cell::from(row.image.clone()),
            ])
            .style(style)
        })
        .collect();

    let title = if rows.len() > viewport_height {
        format!(
            "Movies [{}-{} of {}]",
            visible_start + 1,
            visible_end,
            rows.len()
        )
    } else {
        "Movies".to_string()
    };

    let border_style = if app.focus == Focus::Table {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let table = Table::new(
        table_rows,
        [
            Constraint::Length(5),
            Constraint::Percentage(35),
            Constraint::Length(12),
            Constraint::Length(6),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );

    frame.render_widget(table, area);
}
