use serde::{Deserialize, Serialize};

use crate::model::ids::{text_or_number, MovieId};

/// A single movie in the catalog.
///
/// Records come from an external data source and are never modified once
/// loaded. `year` is kept as a text label: filters compare it by exact
/// string equality, so `"1999"` and `"1999 "` are different years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    pub genre: String,

    #[serde(deserialize_with = "text_or_number")]
    pub year: String,

    /// Poster image URL.
    pub image: String,
}

impl MovieRecord {
    #[must_use]
    pub fn new(
        id: impl Into<MovieId>,
        title: impl Into<String>,
        genre: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            genre: genre.into(),
            year: year.into(),
            image: String::new(),
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}
