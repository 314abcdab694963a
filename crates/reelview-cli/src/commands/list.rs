use std::fmt::{self, Write as _};

use anyhow::Result;
use reelview_core::{CatalogView, OptionControl, RenderedRow};

use super::build_view;
use crate::config::Config;

pub fn run_list(config: &Config) -> Result<()> {
    let view = build_view(config)?;
    print!("{}", format_table(view.rows())?);
    Ok(())
}

pub fn run_options(config: &Config) -> Result<()> {
    let view = build_view(config)?;
    print!("{}", format_options(&view)?);
    Ok(())
}

/// Format rows as a plain table; highlighted rows are marked with `*`.
pub fn format_table(rows: &[RenderedRow]) -> Result<String, fmt::Error> {
    let id_width = column_width(rows.iter().map(|r| r.key.as_str()), "#");
    let title_width = column_width(rows.iter().map(|r| r.title.as_str()), "Title");
    let genre_width = column_width(rows.iter().map(|r| r.genre.as_str()), "Genre");
    let year_width = column_width(rows.iter().map(|r| r.year.as_str()), "Year");

    let mut out = String::new();
    writeln!(
        out,
        "  {:<id_width$}  {:<title_width$}  {:<genre_width$}  {:<year_width$}  Poster",
        "#", "Title", "Genre", "Year",
    )?;
    for row in rows {
        let marker = if row.highlighted { '*' } else { ' ' };
        writeln!(
            out,
            "{} {:<id_width$}  {:<title_width$}  {:<genre_width$}  {:<year_width$}  {}",
            marker,
            row.key.as_str(),
            row.title,
            row.genre,
            row.year,
            row.image,
        )?;
    }
    Ok(out)
}

/// Format the year and genre panels, one `<value> (<count>)` per line.
pub fn format_options(view: &CatalogView) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_panel(&mut out, "Years", view.year_controls())?;
    out.push('\n');
    write_panel(&mut out, "Genres", view.genre_controls())?;
    Ok(out)
}

fn write_panel(out: &mut String, heading: &str, controls: &[OptionControl]) -> fmt::Result {
    writeln!(out, "{}:", heading)?;
    for control in controls {
        writeln!(out, "  {}", control.label())?;
    }
    Ok(())
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, heading: &str) -> usize {
    values
        .map(|value| value.chars().count())
        .max()
        .unwrap_or(0)
        .max(heading.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::TerminalSurface;
    use reelview_core::{Catalog, MovieRecord, ViewConfig};

    fn view() -> CatalogView {
        let catalog = Catalog::new(vec![
            MovieRecord::new(1, "The Matrix", "Action", "1999").with_image("matrix.jpg"),
            MovieRecord::new(2, "Titanic", "Drama", "1997").with_image("titanic.jpg"),
        ])
        .unwrap();
        let mut view = CatalogView::new(catalog, ViewConfig::default(), &TerminalSurface).unwrap();
        view.init();
        view
    }

    #[test]
    fn test_format_table_marks_highlighted_rows() {
        let mut view = view();
        view.set_search_term("titan");
        view.search();
        let table = format_table(view.rows()).unwrap();
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Title"));
        assert!(lines[1].starts_with("  1"));
        assert!(lines[2].starts_with("* 2"));
    }

    #[test]
    fn test_format_table_includes_poster_column() {
        let table = format_table(view().rows()).unwrap();
        let lines: Vec<_> = table.lines().collect();
        assert!(lines[0].ends_with("Poster"));
        assert!(lines[1].ends_with("matrix.jpg"));
        assert!(lines[2].ends_with("titanic.jpg"));
        let poster_at = lines[0].find("Poster").unwrap();
        assert_eq!(lines[1].find("matrix.jpg"), Some(poster_at));
    }

    #[test]
    fn test_format_table_aligns_columns() {
        let table = format_table(view().rows()).unwrap();
        let lines: Vec<_> = table.lines().collect();
        let year_at = lines[0].find("Year").unwrap();
        assert_eq!(lines[1].find("1999"), Some(year_at));
        assert_eq!(lines[2].find("1997"), Some(year_at));
    }

    #[test]
    fn test_format_options() {
        let out = format_options(&view()).unwrap();
        assert_eq!(
            out,
            "Years:\n  1999 (1)\n  1997 (1)\n\nGenres:\n  Action (1)\n  Drama (1)\n"
        );
    }
}
