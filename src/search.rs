//! Menu Filters
//!
//! Pure visibility rules for the menu grid: free-text search and category
//! selection. Recomputed in full on every call.

use crate::models::MenuEntry;

/// Category key that matches every item
pub const ALL_CATEGORIES: &str = "all";

/// Case-insensitive substring match against the name or the full text.
/// A blank query matches everything.
pub fn matches_query(query: &str, entry: &MenuEntry) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    entry.name.to_lowercase().contains(&needle) || entry.text.to_lowercase().contains(&needle)
}

/// Visibility of each entry for `query`, in input order
pub fn filter_visibility(query: &str, entries: &[MenuEntry]) -> Vec<bool> {
    entries.iter().map(|entry| matches_query(query, entry)).collect()
}

/// `all` and unknown categories show every item
pub fn category_visibility(category: &str, entries: &[MenuEntry]) -> Vec<bool> {
    let known = entries.iter().any(|entry| entry.category == category);
    entries
        .iter()
        .map(|entry| category == ALL_CATEGORIES || !known || entry.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, category: &str, text: &str) -> MenuEntry {
        MenuEntry { name: name.into(), category: category.into(), text: text.into() }
    }

    fn menu() -> Vec<MenuEntry> {
        vec![
            entry("Pizza Margherita", "pizzas", "Pizza Margherita Tomate, mozzarella, basilic 9.00 €"),
            entry("Salad", "salades", "Salad Laitue, parmesan, croûtons 7.50 €"),
        ]
    }

    #[test]
    fn test_empty_query_shows_all() {
        assert_eq!(filter_visibility("", &menu()), vec![true, true]);
        assert_eq!(filter_visibility("   ", &menu()), vec![true, true]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        assert_eq!(filter_visibility("piz", &menu()), vec![true, false]);
        assert_eq!(filter_visibility("  PIZ ", &menu()), vec![true, false]);
    }

    #[test]
    fn test_query_matches_rendered_text() {
        assert_eq!(filter_visibility("parmesan", &menu()), vec![false, true]);
        assert_eq!(filter_visibility("sushi", &menu()), vec![false, false]);
    }

    #[test]
    fn test_category_filter() {
        assert_eq!(category_visibility("salades", &menu()), vec![false, true]);
        assert_eq!(category_visibility(ALL_CATEGORIES, &menu()), vec![true, true]);
        assert_eq!(category_visibility("desserts", &menu()), vec![true, true]);
    }
}
