use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A text-or-number value as it appears in catalog files.
///
/// Catalog producers are inconsistent about quoting ids and years, so both
/// forms are accepted and normalized to their text form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Label {
    Text(String),
    Number(serde_json::Number),
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        match label {
            Label::Text(text) => text,
            Label::Number(number) => number.to_string(),
        }
    }
}

/// Deserialize a field that may be written as a string or a number.
pub(crate) fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Label::deserialize(deserializer).map(String::from)
}

/// Stable identifier of a movie record, supplied by the data source.
///
/// Only used to key rows and controls; records are never looked up by id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl<'de> Deserialize<'de> for MovieId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        text_or_number(deserializer).map(Self)
    }
}

impl MovieId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i32> for MovieId {
    fn from(id: i32) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_id_from_number_and_string() {
        let numeric: MovieId = serde_json::from_str("7").unwrap();
        let text: MovieId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(numeric, text);
        assert_eq!(numeric.as_str(), "7");
    }

    #[test]
    fn test_movie_id_serializes_as_text() {
        let id = MovieId::from(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
    }

    #[test]
    fn test_movie_id_display() {
        assert_eq!(MovieId::new("tt0133093").to_string(), "tt0133093");
    }

    #[test]
    fn test_movie_id_rejects_other_shapes() {
        assert!(serde_json::from_str::<MovieId>("[1]").is_err());
        assert!(serde_json::from_str::<MovieId>("null").is_err());
    }
}
