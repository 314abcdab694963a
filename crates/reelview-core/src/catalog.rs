//! The read-only movie dataset.
//!
//! A [`Catalog`] is loaded once and shared by every view that renders it.
//! Cloning the handle is cheap and never copies records.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::model::MovieRecord;

const SAMPLE_JSON: &str = include_str!("../data/movies.json");

/// Ordered, immutable sequence of movie records.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Arc<[MovieRecord]>,
}

impl Catalog {
    /// Build a catalog from records in display order.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateId`] if two records share an id.
    pub fn new(records: Vec<MovieRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(&record.id) {
                return Err(Error::DuplicateId(record.id.to_string()));
            }
        }
        Ok(Self {
            records: records.into(),
        })
    }

    /// Parse a JSON array of movie records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<MovieRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Load a JSON array of movie records from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&contents)?;
        log::info!(
            "Loaded {} movies from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The dataset bundled with the crate.
    pub fn sample() -> Result<Self> {
        Self::from_json_str(SAMPLE_JSON)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MovieRecord;
    type IntoIter = std::slice::Iter<'a, MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
