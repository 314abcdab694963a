//! Match predicates for the three filter actions.

use std::fmt;

use crate::model::MovieRecord;

/// A filter that selects a subset of catalog rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Case-insensitive substring of the title. An empty term matches everything.
    Title(String),
    /// Exact match on the year label.
    Year(String),
    /// Genre equal to any of the listed values. No values match nothing.
    Genres(Vec<String>),
}

impl Filter {
    pub fn title(term: impl Into<String>) -> Self {
        Self::Title(term.into())
    }

    pub fn matches(&self, movie: &MovieRecord) -> bool {
        match self {
            Self::Title(term) => movie
                .title
                .to_lowercase()
                .contains(&term.to_lowercase()),
            Self::Year(year) => movie.year == *year,
            Self::Genres(genres) => genres.iter().any(|genre| *genre == movie.genre),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title(term) => write!(f, "title contains {:?}", term),
            Self::Year(year) => write!(f, "year = {}", year),
            Self::Genres(genres) if genres.is_empty() => f.write_str("no genres"),
            Self::Genres(genres) => write!(f, "genre in [{}]", genres.join(", ")),
        }
    }
}
