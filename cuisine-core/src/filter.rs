//! Store-facing form of a [`FilterSpec`].
//!
//! `RecipeFilter::matches` is the reference definition of what a filter keeps.
//! The in-memory store evaluates it directly; SQL backends translate each field
//! into an equivalent clause.

use crate::types::{FilterSpec, Recipe, ALL_CUISINES};
use std::cmp::Ordering;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilter {
    /// Lower-cased search term. Never empty.
    pub search: Option<String>,
    /// Exact cuisine label. Never the `"all"` sentinel.
    pub cuisine: Option<String>,
    pub min_rating: Option<f64>,
    pub max_time: Option<u32>,
}

impl From<&FilterSpec> for RecipeFilter {
    fn from(spec: &FilterSpec) -> Self {
        let search = spec
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let cuisine = spec
            .cuisine
            .as_deref()
            .filter(|c| *c != ALL_CUISINES)
            .map(str::to_string);

        Self {
            search,
            cuisine,
            min_rating: spec.min_rating,
            max_time: spec.max_time,
        }
    }
}

impl RecipeFilter {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(ref term) = self.search {
            let in_title = recipe.title.to_lowercase().contains(term.as_str());
            if !in_title && !recipe.description.to_lowercase().contains(term.as_str()) {
                return false;
            }
        }

        if let Some(ref cuisine) = self.cuisine {
            if recipe.cuisine != *cuisine {
                return false;
            }
        }

        if let Some(min_rating) = self.min_rating {
            if recipe.rating < min_rating {
                return false;
            }
        }

        if let Some(max_time) = self.max_time {
            if recipe.total_time > max_time {
                return false;
            }
        }

        true
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Result ordering: rating descending, then id ascending for equal ratings.
pub fn compare_by_rating(a: &Recipe, b: &Recipe) -> Ordering {
    b.rating
        .total_cmp(&a.rating)
        .then_with(|| compare_ids(&a.id, &b.id))
}

/// Numeric ids in numeric order (`"2"` before `"10"`), ahead of any
/// non-numeric id; non-numeric ids compare as strings.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn recipes() -> Vec<Recipe> {
        seed::sample_recipes()
            .into_iter()
            .enumerate()
            .map(|(i, r)| r.into_recipe(i.to_string()))
            .collect()
    }

    #[test]
    fn test_all_sentinel_and_blank_search_are_dropped() {
        let spec = FilterSpec::default().with_cuisine("all").with_search("");
        assert!(RecipeFilter::from(&spec).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_on_title_or_description() {
        let filter = RecipeFilter::from(&FilterSpec::default().with_search("CrIsPy"));
        let titles: Vec<_> = recipes()
            .into_iter()
            .filter(|r| filter.matches(r))
            .map(|r| r.title)
            .collect();
        // "crispy bacon" and "Crisp romaine" -> only the first contains "crispy"
        assert_eq!(titles, vec!["Spaghetti Carbonara"]);
    }

    #[test]
    fn test_cuisine_is_exact_match() {
        let filter = RecipeFilter::from(&FilterSpec::default().with_cuisine("italian"));
        assert!(!recipes().iter().any(|r| filter.matches(r)));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let filter = RecipeFilter::from(
            &FilterSpec::default()
                .with_min_rating(4.6)
                .with_max_time(30),
        );
        let titles: Vec<_> = recipes()
            .into_iter()
            .filter(|r| filter.matches(r))
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["Spaghetti Carbonara", "Pad Thai"]);
    }

    #[test]
    fn test_zero_min_rating_keeps_everything() {
        let filter = RecipeFilter::from(&FilterSpec::default().with_min_rating(0.0));
        assert!(!filter.is_empty());
        assert!(recipes().iter().all(|r| filter.matches(r)));
    }

    #[test]
    fn test_equal_ratings_order_by_id() {
        let mut all = recipes();
        for r in &mut all {
            r.rating = 4.0;
        }
        all.reverse();
        all.sort_by(compare_by_rating);
        let ids: Vec<_> = all.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_positional_ids_order_numerically() {
        let mut all: Vec<Recipe> = (0..12)
            .rev()
            .map(|i| {
                let mut r = recipes().remove(0);
                r.id = i.to_string();
                r.rating = 4.0;
                r
            })
            .collect();
        all.sort_by(compare_by_rating);
        let ids: Vec<_> = all.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11"]
        );
    }

    #[test]
    fn test_compare_ids_mixed() {
        assert_eq!(compare_ids("9", "10"), Ordering::Less);
        assert_eq!(compare_ids("10", "abc"), Ordering::Less);
        assert_eq!(compare_ids("abc", "abd"), Ordering::Less);
        // Leading zeros still give a total order
        assert_eq!(compare_ids("07", "7"), Ordering::Less);
    }
}
