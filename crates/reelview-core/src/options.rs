//! Distinct-value option sets for the year and genre panels.
//!
//! Options are listed in order of first appearance in the catalog, not
//! sorted. Counts cover the whole catalog and never depend on the current
//! selection.

use std::collections::HashMap;
use std::fmt;

use crate::catalog::Catalog;
use crate::model::{MovieId, MovieRecord};

/// One distinct field value and how many records carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub count: usize,
    /// Id of the first record carrying this value; keys the rendered control.
    pub first_id: MovieId,
}

impl fmt::Display for FilterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&label(&self.value, self.count))
    }
}

/// Panel label for a value and its count, e.g. `1999 (2)`.
pub(crate) fn label(value: &str, count: usize) -> String {
    format!("{} ({})", value, count)
}

/// Distinct `year` values with their counts.
pub fn year_options(catalog: &Catalog) -> Vec<FilterOption> {
    distinct_by(catalog, |movie| &movie.year)
}

/// Distinct `genre` values with their counts.
pub fn genre_options(catalog: &Catalog) -> Vec<FilterOption> {
    distinct_by(catalog, |movie| &movie.genre)
}

/// Number of records whose year is exactly `year`.
pub fn count_year(catalog: &Catalog, year: &str) -> usize {
    catalog.iter().filter(|movie| movie.year == year).count()
}

/// Number of records whose genre is exactly `genre`.
pub fn count_genre(catalog: &Catalog, genre: &str) -> usize {
    catalog.iter().filter(|movie| movie.genre == genre).count()
}

fn distinct_by<F>(catalog: &Catalog, field: F) -> Vec<FilterOption>
where
    F: Fn(&MovieRecord) -> &String,
{
    let mut options: Vec<FilterOption> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for movie in catalog {
        let value = field(movie);
        if let Some(&pos) = positions.get(value.as_str()) {
            options[pos].count += 1;
        } else {
            positions.insert(value.as_str(), options.len());
            options.push(FilterOption {
                value: value.clone(),
                count: 1,
                first_id: movie.id.clone(),
            });
        }
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            MovieRecord::new(1, "The Matrix", "Action", "1999"),
            MovieRecord::new(2, "Titanic", "Drama", "1997"),
            MovieRecord::new(3, "Gladiator", "Action", "2000"),
            MovieRecord::new(4, "Fight Club", "Drama", "1999"),
        ])
        .unwrap()
    }

    #[test]
    fn test_year_options_first_appearance_order() {
        let years: Vec<_> = year_options(&catalog())
            .into_iter()
            .map(|o| (o.value, o.count))
            .collect();
        assert_eq!(
            years,
            vec![
                ("1999".to_string(), 2),
                ("1997".to_string(), 1),
                ("2000".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_genre_options_keyed_by_first_record() {
        let genres = genre_options(&catalog());
        assert_eq!(genres.len(), 2);
        assert_eq!(genres[0].first_id, MovieId::from(1));
        assert_eq!(genres[1].first_id, MovieId::from(2));
        assert_eq!(genres[1].count, 2);
    }

    #[test]
    fn test_counts_match_option_counts() {
        let catalog = catalog();
        for option in year_options(&catalog) {
            assert_eq!(option.count, count_year(&catalog, &option.value));
            assert!(option.count >= 1);
        }
        for option in genre_options(&catalog) {
            assert_eq!(option.count, count_genre(&catalog, &option.value));
        }
    }

    #[test]
    fn test_near_duplicate_values_stay_distinct() {
        let catalog = Catalog::new(vec![
            MovieRecord::new(1, "A", "Action", "1999"),
            MovieRecord::new(2, "B", "action", "1999 "),
        ])
        .unwrap();
        assert_eq!(year_options(&catalog).len(), 2);
        assert_eq!(genre_options(&catalog).len(), 2);
    }

    #[test]
    fn test_label_format() {
        let option = &year_options(&catalog())[0];
        assert_eq!(option.to_string(), "1999 (2)");
        assert_eq!(label("Drama", 0), "Drama (0)");
    }

    #[test]
    fn test_empty_catalog_has_no_options() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(year_options(&catalog).is_empty());
        assert!(genre_options(&catalog).is_empty());
    }
}
