//! Menu categories and the category selector used by the menu filter.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Category a menu item is listed under.
///
/// Parsing is case-insensitive, so `"beverages"` and `"Beverages"` name the
/// same category. New categories are added as variants here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuCategory {
    Beverages,
    Pastry,
    Breakfast,
    Dessert,
}

impl MenuCategory {
    /// All categories in tab order.
    pub const ALL: [Self; 4] = [
        Self::Beverages,
        Self::Pastry,
        Self::Breakfast,
        Self::Dessert,
    ];

    /// Display name as stored on items.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beverages => "Beverages",
            Self::Pastry => "Pastry",
            Self::Breakfast => "Breakfast",
            Self::Dessert => "Dessert",
        }
    }

    /// Lowercase key used in URLs and tab selectors.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Beverages => "beverages",
            Self::Pastry => "pastry",
            Self::Breakfast => "breakfast",
            Self::Dessert => "dessert",
        }
    }

    /// Look up a category by name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selector for [`MenuCatalog::filtered_items`](crate::MenuCatalog::filtered_items).
///
/// `"all"` (any case) or an empty selector disables category filtering; any
/// other value keeps items whose category name matches it case-insensitively.
/// A value naming no known category matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Selector value meaning "every category".
    pub const ALL_KEY: &'static str = "all";

    /// Build a selector from user input.
    #[must_use]
    pub fn parse(selector: &str) -> Self {
        let selector = selector.trim();
        if selector.is_empty() || selector.eq_ignore_ascii_case(Self::ALL_KEY) {
            Self::All
        } else {
            Self::Named(selector.to_lowercase())
        }
    }

    /// Whether an item in `category` passes this selector.
    #[must_use]
    pub fn matches(&self, category: MenuCategory) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => category.as_str().eq_ignore_ascii_case(name),
        }
    }

    /// Lowercase key for tab highlighting (`all`, `beverages`, ...).
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::All => Self::ALL_KEY,
            Self::Named(name) => name,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(selector: &str) -> Self {
        Self::parse(selector)
    }
}

impl From<MenuCategory> for CategoryFilter {
    fn from(category: MenuCategory) -> Self {
        Self::Named(category.slug().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!(MenuCategory::parse("beverages"), Some(MenuCategory::Beverages));
        assert_eq!(MenuCategory::parse(" DESSERT "), Some(MenuCategory::Dessert));
        assert_eq!(MenuCategory::parse("Soup"), None);
        assert_eq!(MenuCategory::parse(""), None);
    }

    #[test]
    fn test_filter_all_matches_everything() {
        let filter = CategoryFilter::parse("ALL");
        assert_eq!(filter, CategoryFilter::All);
        for category in MenuCategory::ALL {
            assert!(filter.matches(category));
        }
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
    }

    #[test]
    fn test_filter_named_is_case_insensitive() {
        let filter = CategoryFilter::parse("PaStRy");
        assert!(filter.matches(MenuCategory::Pastry));
        assert!(!filter.matches(MenuCategory::Dessert));
        assert_eq!(filter.key(), "pastry");
    }

    #[test]
    fn test_filter_unknown_matches_nothing() {
        let filter = CategoryFilter::parse("soup");
        for category in MenuCategory::ALL {
            assert!(!filter.matches(category));
        }
    }
}
