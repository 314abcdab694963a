use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// The parts of the presentation surface a view writes to or reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetRole {
    Root,
    SearchInput,
    SearchForm,
    YearBox,
    YearSubmitter,
    GenreBox,
    GenreSubmitter,
}

impl fmt::Display for TargetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Root => "results table",
            Self::SearchInput => "search input",
            Self::SearchForm => "search form",
            Self::YearBox => "year panel",
            Self::YearSubmitter => "year submit control",
            Self::GenreBox => "genre panel",
            Self::GenreSubmitter => "genre submit control",
        };
        f.write_str(name)
    }
}

/// Anything that exposes named regions a [`CatalogView`](super::CatalogView)
/// can bind to.
pub trait Surface {
    fn has_target(&self, name: &str) -> bool;
}

impl<S: AsRef<str>> Surface for [S] {
    fn has_target(&self, name: &str) -> bool {
        self.iter().any(|target| target.as_ref() == name)
    }
}

impl<S: AsRef<str>> Surface for Vec<S> {
    fn has_target(&self, name: &str) -> bool {
        self.as_slice().has_target(name)
    }
}

/// Names of the presentation targets and control groups a view binds to.
///
/// Loaded from the `[view]` section of the config file; every field has a
/// default so a partial section is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub root: String,
    pub search_input: String,
    pub search_form: String,
    /// Group name shared by the year radio controls.
    pub year_handler: String,
    pub year_submitter: String,
    pub year_box: String,
    /// Group name shared by the genre checkbox controls.
    pub genre_handler: String,
    pub genre_submitter: String,
    pub genre_box: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            root: "movies-table".to_string(),
            search_input: "searchInput".to_string(),
            search_form: "searchForm".to_string(),
            year_handler: "year".to_string(),
            year_submitter: "yearSubmitter".to_string(),
            year_box: "yearBox".to_string(),
            genre_handler: "genre".to_string(),
            genre_submitter: "genreSubmitter".to_string(),
            genre_box: "genreBox".to_string(),
        }
    }
}

impl ViewConfig {
    /// Every named target with the role it plays.
    pub fn targets(&self) -> [(TargetRole, &str); 7] {
        [
            (TargetRole::Root, self.root.as_str()),
            (TargetRole::SearchInput, self.search_input.as_str()),
            (TargetRole::SearchForm, self.search_form.as_str()),
            (TargetRole::YearBox, self.year_box.as_str()),
            (TargetRole::YearSubmitter, self.year_submitter.as_str()),
            (TargetRole::GenreBox, self.genre_box.as_str()),
            (TargetRole::GenreSubmitter, self.genre_submitter.as_str()),
        ]
    }

    /// Check the handler names and that `surface` exposes every target.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`] for empty or clashing handler names,
    /// [`Error::MissingTarget`] for the first target the surface lacks.
    pub fn validate<S: Surface + ?Sized>(&self, surface: &S) -> Result<()> {
        if self.year_handler.is_empty() || self.genre_handler.is_empty() {
            return Err(Error::InvalidConfig(
                "year and genre handler names must not be empty".to_string(),
            ));
        }
        if self.year_handler == self.genre_handler {
            return Err(Error::InvalidConfig(format!(
                "year and genre controls share the handler name {:?}",
                self.year_handler
            )));
        }

        for (role, name) in self.targets() {
            if !surface.has_target(name) {
                return Err(Error::MissingTarget {
                    role,
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_surface(config: &ViewConfig) -> Vec<String> {
        config
            .targets()
            .iter()
            .map(|(_, name)| (*name).to_string())
            .collect()
    }

    #[test]
    fn test_default_config_validates_against_full_surface() {
        let config = ViewConfig::default();
        assert!(config.validate(&full_surface(&config)).is_ok());
    }

    #[test]
    fn test_missing_target_reports_role() {
        let config = ViewConfig::default();
        let surface: Vec<String> = full_surface(&config)
            .into_iter()
            .filter(|name| name != "genreBox")
            .collect();
        let err = config.validate(&surface).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingTarget { role: TargetRole::GenreBox, ref name } if name == "genreBox"
        ));
    }

    #[test]
    fn test_clashing_handlers_rejected() {
        let config = ViewConfig {
            genre_handler: "year".to_string(),
            ..ViewConfig::default()
        };
        let err = config.validate(&full_surface(&config)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_handler_rejected() {
        let config = ViewConfig {
            year_handler: String::new(),
            ..ViewConfig::default()
        };
        assert!(config.validate(&full_surface(&config)).is_err());
    }

    #[test]
    fn test_slice_surface() {
        let surface = ["movies-table", "yearBox"];
        assert!(surface[..].has_target("yearBox"));
        assert!(!surface[..].has_target("genreBox"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ViewConfig = serde_json::from_str(r#"{"year_box": "years"}"#).unwrap();
        assert_eq!(config.year_box, "years");
        assert_eq!(config.genre_box, "genreBox");
    }
}
