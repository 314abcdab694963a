use anyhow::{Context, Result};
use reelview_core::{CatalogView, FilterOutcome};

use super::build_view;
use super::list::format_table;
use crate::config::Config;

/// Run a title search and print the table with the matches marked.
pub fn run_search(config: &Config, term: &str) -> Result<()> {
    let mut view = build_view(config)?;
    view.set_search_term(term);
    let outcome = view.search();
    print_result(&view, &outcome)
}

/// Check `year` in the year panel, submit it and print the result.
pub fn run_year(config: &Config, year: &str) -> Result<()> {
    let mut view = build_view(config)?;
    view.select_year(year)
        .context("Run 'reelview options' to list the available years")?;
    let outcome = view.filter_by_year()?;
    print_result(&view, &outcome)
}

/// Check every genre in `genres`, submit and print the result.
pub fn run_genre(config: &Config, genres: &[String]) -> Result<()> {
    let mut view = build_view(config)?;
    for genre in genres {
        view.set_genre_checked(genre, true)
            .context("Run 'reelview options' to list the available genres")?;
    }
    let outcome = view.filter_by_genres();
    print_result(&view, &outcome)
}

fn print_result(view: &CatalogView, outcome: &FilterOutcome) -> Result<()> {
    print!("{}", format_table(view.rows())?);
    println!(
        "\n{} of {} movies highlighted ({})",
        outcome.matched.len(),
        view.rows().len(),
        outcome.filter
    );
    Ok(())
}
