use serde::Serialize;

use crate::constants::ALL_CATEGORIES;

/// Anything that can be narrowed by the category filter.
pub trait Categorized {
    fn category(&self) -> &str;
}

/// The visitor's filter choice. Matching is exact: no case folding, no trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelection {
    All,
    Only(String),
}

impl CategorySelection {
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some(ALL_CATEGORIES) => CategorySelection::All,
            Some(other) => CategorySelection::Only(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES,
            CategorySelection::Only(c) => c,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(selected) => selected == category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelection::All)
    }
}

/// Keeps items whose category equals the selection, preserving input order.
pub fn filter_by_category<T: Categorized>(items: Vec<T>, selection: &CategorySelection) -> Vec<T> {
    match selection {
        CategorySelection::All => items,
        CategorySelection::Only(_) => items
            .into_iter()
            .filter(|item| selection.matches(item.category()))
            .collect(),
    }
}

/// One entry of a listing page's filter menu.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryOption {
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

pub const BLOG_CATEGORIES: &[(&str, &str)] = &[
    (ALL_CATEGORIES, "All"),
    ("ai", "Artificial Intelligence"),
    ("web", "Web Development"),
    ("backend", "Backend"),
    ("mobile", "Mobile"),
];

pub const PROJECT_CATEGORIES: &[(&str, &str)] = &[
    (ALL_CATEGORIES, "All"),
    ("ai", "AI Projects"),
    ("fullstack", "Full Stack"),
    ("backend", "Backend Systems"),
];

pub fn category_menu(
    categories: &[(&'static str, &'static str)],
    selection: &CategorySelection,
) -> Vec<CategoryOption> {
    categories
        .iter()
        .map(|&(id, label)| CategoryOption {
            id,
            label,
            active: id == selection.as_str(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(&'static str, &'static str);

    impl Categorized for Item {
        fn category(&self) -> &str {
            self.1
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item("b", "ai"),
            Item("a", "ai"),
            Item("c", "web"),
            Item("d", "AI"),
            Item("e", "ai "),
        ]
    }

    #[test]
    fn all_passes_collection_through() {
        let filtered = filter_by_category(items(), &CategorySelection::All);
        assert_eq!(filtered, items());
    }

    #[test]
    fn exact_match_preserves_order() {
        let filtered = filter_by_category(items(), &CategorySelection::Only("ai".into()));
        assert_eq!(filtered, vec![Item("b", "ai"), Item("a", "ai")]);
    }

    #[test]
    fn matching_is_case_sensitive_and_untrimmed() {
        let filtered = filter_by_category(items(), &CategorySelection::Only("AI".into()));
        assert_eq!(filtered, vec![Item("d", "AI")]);
    }

    #[test]
    fn unknown_category_yields_empty() {
        let filtered = filter_by_category(items(), &CategorySelection::Only("mobile".into()));
        assert!(filtered.is_empty());
    }

    #[test]
    fn selection_parses_sentinel_and_blank() {
        assert_eq!(CategorySelection::from_query(None), CategorySelection::All);
        assert_eq!(CategorySelection::from_query(Some("")), CategorySelection::All);
        assert_eq!(CategorySelection::from_query(Some("all")), CategorySelection::All);
        assert_eq!(
            CategorySelection::from_query(Some("All")),
            CategorySelection::Only("All".into())
        );
    }

    #[test]
    fn menu_flags_active_entry() {
        let menu = category_menu(BLOG_CATEGORIES, &CategorySelection::Only("web".into()));
        let active: Vec<_> = menu.iter().filter(|o| o.active).map(|o| o.id).collect();
        assert_eq!(active, vec!["web"]);
    }
}
