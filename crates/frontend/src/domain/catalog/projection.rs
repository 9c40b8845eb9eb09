use contracts::domain::product::Product;

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Price sort direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

/// Transient filter/sort/search state driving the displayed list.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    pub category: String,
    pub order: SortOrder,
    pub search: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            order: SortOrder::Asc,
            search: String::new(),
        }
    }
}

/// Derive the displayed list from the full catalog.
///
/// Filters by category (skipped for "all"), then by case-insensitive
/// substring match on the title, then sorts by price in the requested
/// direction. Pure and total; the source list is never mutated.
pub fn derive_display_list(products: &[Product], filter: &FilterState) -> Vec<Product> {
    let search = filter.search.to_lowercase();

    let mut list: Vec<Product> = products
        .iter()
        .filter(|p| filter.category == ALL_CATEGORIES || p.category == filter.category)
        .filter(|p| search.is_empty() || p.title.to_lowercase().contains(&search))
        .cloned()
        .collect();

    list.sort_by(|a, b| {
        let cmp = a.price.total_cmp(&b.price);
        match filter.order {
            SortOrder::Asc => cmp,
            SortOrder::Desc => cmp.reverse(),
        }
    });

    list
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, title: &str, category: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: String::new(),
            price,
            image: String::new(),
            category: category.to_string(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Red Tee", "T-shirts", 10.0),
            product(2, "Mug", "Canecas", 5.0),
            product(3, "Blue Tee", "T-shirts", 12.5),
        ]
    }

    #[test]
    fn all_categories_sort_ascending_by_price() {
        let shown = derive_display_list(&catalog(), &FilterState::default());
        let titles: Vec<_> = shown.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Mug", "Red Tee", "Blue Tee"]);
    }

    #[test]
    fn descending_sort_reverses_price_order() {
        let filter = FilterState {
            order: SortOrder::Desc,
            ..FilterState::default()
        };
        let shown = derive_display_list(&catalog(), &filter);
        let titles: Vec<_> = shown.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Blue Tee", "Red Tee", "Mug"]);
    }

    #[test]
    fn category_filter_keeps_only_matching_products() {
        let filter = FilterState {
            category: "T-shirts".to_string(),
            ..FilterState::default()
        };
        let shown = derive_display_list(&catalog(), &filter);
        assert!(shown.len() <= catalog().len());
        assert!(shown.iter().all(|p| p.category == "T-shirts"));
        assert_eq!(shown.len(), 2);
    }

    #[test]
    fn search_is_case_insensitive_substring_on_title() {
        let filter = FilterState {
            search: "TEE".to_string(),
            ..FilterState::default()
        };
        let shown = derive_display_list(&catalog(), &filter);
        let titles: Vec<_> = shown.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Red Tee", "Blue Tee"]);
    }

    #[test]
    fn unmatched_filters_yield_an_empty_list() {
        let filter = FilterState {
            category: "Meias".to_string(),
            ..FilterState::default()
        };
        assert!(derive_display_list(&catalog(), &filter).is_empty());
    }

    #[test]
    fn projection_is_idempotent() {
        let filter = FilterState {
            category: "T-shirts".to_string(),
            order: SortOrder::Desc,
            search: "tee".to_string(),
        };
        let once = derive_display_list(&catalog(), &filter);
        let twice = derive_display_list(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn source_list_is_never_mutated() {
        let source = catalog();
        let filter = FilterState {
            order: SortOrder::Desc,
            ..FilterState::default()
        };
        let _ = derive_display_list(&source, &filter);
        assert_eq!(source, catalog());
    }
}
