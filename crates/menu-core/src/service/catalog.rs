//! Search and category filtering for the dish listing.

use crate::domain::{CategoryFilter, Dish};
use crate::security::sanitize_text;

/// Longest search term the listing accepts; longer input is cut.
pub const SEARCH_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishFilter {
    search: String,
    category: CategoryFilter,
}

impl DishFilter {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.chars().take(SEARCH_MAX_CHARS).collect();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.category != CategoryFilter::All
    }

    /// Stored names and descriptions are already escaped, so the needle is
    /// escaped the same way before matching.
    pub fn matches(&self, dish: &Dish) -> bool {
        if !self.category.matches(dish.category) {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }

        let needle = sanitize_text(&self.search.to_lowercase());
        dish.name.to_lowercase().contains(&needle)
            || dish.description.to_lowercase().contains(&needle)
    }

    pub fn apply(&self, dishes: Vec<Dish>) -> Vec<Dish> {
        dishes.into_iter().filter(|d| self.matches(d)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DishCategory;
    use crate::service::testing::draft;

    fn dish(name: &str, description: &str, category: DishCategory) -> Dish {
        let mut draft = draft(name);
        draft.description = description.to_string();
        draft.category = category;
        Dish::new(draft)
    }

    fn menu() -> Vec<Dish> {
        vec![
            dish("Truffle Risotto", "Creamy arborio rice", DishCategory::Mains),
            dish("Caesar Salad", "Crisp romaine", DishCategory::Salads),
            dish("Fish &lt;n&gt; Chips", "Battered cod", DishCategory::Mains),
        ]
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = DishFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(menu()).len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_description() {
        let mut filter = DishFilter::default();
        filter.set_search("RISOTTO");
        assert_eq!(filter.apply(menu())[0].name, "Truffle Risotto");

        filter.set_search("romaine");
        let hits = filter.apply(menu());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Caesar Salad");
    }

    #[test]
    fn test_search_matches_escaped_names() {
        let mut filter = DishFilter::default();
        filter.set_search("<n>");
        let hits = filter.apply(menu());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].description, "Battered cod");
    }

    #[test]
    fn test_category_and_search_combine() {
        let mut filter = DishFilter::default();
        filter.set_category(CategoryFilter::Only(DishCategory::Mains));
        assert_eq!(filter.apply(menu()).len(), 2);

        filter.set_search("cod");
        assert_eq!(filter.apply(menu()).len(), 1);

        filter.set_category(CategoryFilter::Only(DishCategory::Desserts));
        assert!(filter.apply(menu()).is_empty());
    }

    #[test]
    fn test_search_term_is_truncated() {
        let mut filter = DishFilter::default();
        filter.set_search(&"x".repeat(SEARCH_MAX_CHARS + 20));
        assert_eq!(filter.search().chars().count(), SEARCH_MAX_CHARS);
    }
}
