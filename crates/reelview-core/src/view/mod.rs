//! The catalog view: rendered rows, option panels and highlight state.
//!
//! A [`CatalogView`] is the only owner of presentation state. The
//! presentation layer forwards control changes (typing a search term,
//! checking a year or genre) and submit actions to it, then redraws from
//! [`CatalogView::rows`] and the control lists.
//!
//! Only one filter's result is ever displayed. Every filter action starts
//! with [`CatalogView::reset`], which clears all highlights and the
//! selections of the competing filter groups, then highlights exactly the
//! rows matching the new predicate.

mod config;
mod controls;

pub use config::{Surface, TargetRole, ViewConfig};
pub use controls::{ControlKind, OptionControl, RenderedRow};

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::filter::Filter;
use crate::model::MovieId;
use crate::options;
use crate::selection::Selection;

/// The three user actions that compute a new highlight set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAction {
    Search,
    Year,
    Genres,
}

/// Result of one filter action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub filter: Filter,
    /// Ids of the highlighted rows, in catalog order.
    pub matched: Vec<MovieId>,
}

#[derive(Debug)]
pub struct CatalogView {
    catalog: Catalog,
    config: ViewConfig,
    rows: Vec<RenderedRow>,
    years: Vec<OptionControl>,
    genres: Vec<OptionControl>,
    search_input: String,
    active: Option<Filter>,
}

impl CatalogView {
    /// Bind a view to `surface`.
    ///
    /// Nothing is rendered yet; call [`CatalogView::init`] or the
    /// individual render methods.
    ///
    /// # Errors
    /// Fails if the configuration is invalid or names a target the surface
    /// does not expose.
    pub fn new<S: Surface + ?Sized>(
        catalog: Catalog,
        config: ViewConfig,
        surface: &S,
    ) -> Result<Self> {
        config.validate(surface)?;
        Ok(Self {
            catalog,
            config,
            rows: Vec::new(),
            years: Vec::new(),
            genres: Vec::new(),
            search_input: String::new(),
            active: None,
        })
    }

    /// Render the table and both option panels.
    pub fn init(&mut self) {
        self.render();
        self.render_year_options();
        self.render_genre_options();
        log::debug!(
            "Rendered {} rows, {} year options, {} genre options",
            self.rows.len(),
            self.years.len(),
            self.genres.len()
        );
    }

    /// Replace the row collection with one unhighlighted row per record.
    pub fn render(&mut self) {
        self.rows = self.catalog.iter().map(RenderedRow::from).collect();
        self.active = None;
    }

    /// Replace the year panel with one radio control per distinct year.
    pub fn render_year_options(&mut self) {
        let group = self.config.year_handler.as_str();
        self.years = options::year_options(&self.catalog)
            .into_iter()
            .map(|option| OptionControl::new(ControlKind::Radio, group, option))
            .collect();
    }

    /// Replace the genre panel with one checkbox control per distinct genre.
    pub fn render_genre_options(&mut self) {
        let group = self.config.genre_handler.as_str();
        self.genres = options::genre_options(&self.catalog)
            .into_iter()
            .map(|option| OptionControl::new(ControlKind::Checkbox, group, option))
            .collect();
    }

    pub fn clear_highlights(&mut self) {
        for row in &mut self.rows {
            row.highlighted = false;
        }
        self.active = None;
    }

    pub fn clear_genre_selections(&mut self) {
        for control in &mut self.genres {
            control.checked = false;
        }
    }

    pub fn clear_year_selection(&mut self) {
        for control in &mut self.years {
            control.checked = false;
        }
    }

    /// Return to the baseline a filter action starts from.
    ///
    /// Highlights are always cleared. Search clears both option groups,
    /// the year action clears genres and the genre action clears the year.
    /// An action's own input is left alone so it can still be read.
    pub fn reset(&mut self, action: FilterAction) {
        self.clear_highlights();
        match action {
            FilterAction::Search => {
                self.clear_genre_selections();
                self.clear_year_selection();
            }
            FilterAction::Year => self.clear_genre_selections(),
            FilterAction::Genres => self.clear_year_selection(),
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_input = term.into();
    }

    /// Check the year control holding `year`, unchecking the others.
    pub fn select_year(&mut self, year: &str) -> Result<()> {
        let group = &self.config.year_handler;
        if !self.years.iter().any(|control| control.value == year) {
            return Err(Error::UnknownOption {
                group: group.clone(),
                value: year.to_string(),
            });
        }
        for control in &mut self.years {
            control.checked = control.value == year;
        }
        Ok(())
    }

    /// Flip the genre control holding `genre`; returns its new state.
    pub fn toggle_genre(&mut self, genre: &str) -> Result<bool> {
        let control = self.genre_control_mut(genre)?;
        control.checked = !control.checked;
        Ok(control.checked)
    }

    pub fn set_genre_checked(&mut self, genre: &str, checked: bool) -> Result<()> {
        self.genre_control_mut(genre)?.checked = checked;
        Ok(())
    }

    fn genre_control_mut(&mut self, genre: &str) -> Result<&mut OptionControl> {
        let group = &self.config.genre_handler;
        self.genres
            .iter_mut()
            .find(|control| control.value == genre)
            .ok_or_else(|| Error::UnknownOption {
                group: group.clone(),
                value: genre.to_string(),
            })
    }

    pub fn selection(&self) -> Selection {
        Selection {
            year: self.checked_year().map(str::to_string),
            genres: self.checked_genres(),
            search: self.search_input.clone(),
        }
    }

    fn checked_year(&self) -> Option<&str> {
        self.years
            .iter()
            .find(|control| control.checked)
            .map(|control| control.value.as_str())
    }

    fn checked_genres(&self) -> Vec<String> {
        self.genres
            .iter()
            .filter(|control| control.checked)
            .map(|control| control.value.clone())
            .collect()
    }

    /// Highlight rows whose title contains the pending search term, then
    /// clear the search input.
    pub fn search(&mut self) -> FilterOutcome {
        let term = self.search_input.clone();
        self.reset(FilterAction::Search);
        let outcome = self.apply(Filter::title(term));
        self.search_input.clear();
        outcome
    }

    /// Highlight rows from the checked year.
    ///
    /// # Errors
    /// [`Error::NoYearSelected`] if no year is checked. The view is left
    /// exactly as it was.
    pub fn filter_by_year(&mut self) -> Result<FilterOutcome> {
        let year = self
            .checked_year()
            .map(str::to_string)
            .ok_or(Error::NoYearSelected)?;
        self.reset(FilterAction::Year);
        Ok(self.apply(Filter::Year(year)))
    }

    /// Highlight rows whose genre is any of the checked genres.
    pub fn filter_by_genres(&mut self) -> FilterOutcome {
        let genres = self.checked_genres();
        self.reset(FilterAction::Genres);
        self.apply(Filter::Genres(genres))
    }

    /// Evaluate `filter` once per record. Rows are highlighted from the same
    /// result that fills `matched`; before `render` there are no rows.
    fn apply(&mut self, filter: Filter) -> FilterOutcome {
        let mut matched = Vec::new();
        for (i, movie) in self.catalog.iter().enumerate() {
            let hit = filter.matches(movie);
            if let Some(row) = self.rows.get_mut(i) {
                row.highlighted = hit;
            }
            if hit {
                matched.push(movie.id.clone());
            }
        }
        log::debug!("Filter {} matched {} rows", filter, matched.len());
        self.active = Some(filter.clone());
        FilterOutcome { filter, matched }
    }

    pub fn rows(&self) -> &[RenderedRow] {
        &self.rows
    }

    pub fn year_controls(&self) -> &[OptionControl] {
        &self.years
    }

    pub fn genre_controls(&self) -> &[OptionControl] {
        &self.genres
    }

    pub fn search_term(&self) -> &str {
        &self.search_input
    }

    /// The filter whose result is currently highlighted, if any.
    pub fn active_filter(&self) -> Option<&Filter> {
        self.active.as_ref()
    }

    pub fn highlighted_ids(&self) -> Vec<MovieId> {
        self.rows
            .iter()
            .filter(|row| row.highlighted)
            .map(|row| row.key.clone())
            .collect()
    }
}
