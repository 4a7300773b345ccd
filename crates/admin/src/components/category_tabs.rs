//! Category tab strip on the menu page.

use cafe_core::{CategoryFilter, MenuCategory};

/// One tab linking to the menu filtered by a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTab {
    pub label: String,
    pub href: String,
    pub active: bool,
}

impl CategoryTab {
    /// Build the "All" tab followed by one tab per category.
    ///
    /// Each link keeps the current search query.
    #[must_use]
    pub fn build(filter: &CategoryFilter, query: &str) -> Vec<Self> {
        let all = Self {
            label: "All".to_string(),
            href: menu_href(CategoryFilter::ALL_KEY, query),
            active: matches!(filter, CategoryFilter::All),
        };

        std::iter::once(all)
            .chain(MenuCategory::ALL.iter().map(|category| Self {
                label: category.as_str().to_string(),
                href: menu_href(category.slug(), query),
                active: filter.key() == category.slug(),
            }))
            .collect()
    }
}

fn menu_href(category: &str, query: &str) -> String {
    if query.is_empty() {
        format!("/menu?category={category}")
    } else {
        format!(
            "/menu?category={category}&query={}",
            urlencoding::encode(query)
        )
    }
}
