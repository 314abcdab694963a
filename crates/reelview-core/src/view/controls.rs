use crate::model::{MovieId, MovieRecord};
use crate::options::{self, FilterOption};

/// One row of the results table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub key: MovieId,
    pub image: String,
    pub title: String,
    pub genre: String,
    pub year: String,
    pub highlighted: bool,
}

impl From<&MovieRecord> for RenderedRow {
    fn from(movie: &MovieRecord) -> Self {
        Self {
            key: movie.id.clone(),
            image: movie.image.clone(),
            title: movie.title.clone(),
            genre: movie.genre.clone(),
            year: movie.year.clone(),
            highlighted: false,
        }
    }
}

/// How the controls of a group behave when checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Single-select: checking one unchecks the rest of the group.
    Radio,
    /// Multi-select.
    Checkbox,
}

/// A rendered year or genre option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionControl {
    pub kind: ControlKind,
    /// Handler name shared by every control in the group.
    pub group: String,
    /// `<group><first record id>`, unique across the surface.
    pub id: String,
    pub value: String,
    pub count: usize,
    pub checked: bool,
}

impl OptionControl {
    pub(crate) fn new(kind: ControlKind, group: &str, option: FilterOption) -> Self {
        Self {
            kind,
            group: group.to_string(),
            id: format!("{}{}", group, option.first_id),
            value: option.value,
            count: option.count,
            checked: false,
        }
    }

    pub fn label(&self) -> String {
        options::label(&self.value, self.count)
    }
}
