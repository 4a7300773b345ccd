//! The menu catalog: authoritative in-memory list of menu items.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::draft::{ItemDraft, ValidItem};
use crate::error::{CatalogError, EntityKind, NotFoundError, SeedError, ValidationError};
use crate::types::{CategoryFilter, MenuCategory, MenuItemId, Price};

/// An item on the café menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: MenuCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl MenuItem {
    fn from_valid(id: MenuItemId, valid: ValidItem) -> Self {
        Self {
            id,
            name: valid.name,
            description: valid.description,
            price: valid.price,
            category: valid.category,
            image: valid.image,
        }
    }

    fn apply(&mut self, valid: ValidItem) {
        self.name = valid.name;
        self.description = valid.description;
        self.price = valid.price;
        self.category = valid.category;
        self.image = valid.image;
    }

    /// Case-insensitive substring match against name or description.
    ///
    /// `needle` must already be lowercase.
    fn mentions(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// A menu item from a seed source, keyed by a caller-chosen id.
///
/// Draft fields are text, so YAML sources must quote `id` and `price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedItem {
    pub id: MenuItemId,
    #[serde(flatten)]
    pub draft: ItemDraft,
}

/// The authoritative collection of menu items.
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from seed items, validating each one like a new item.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::DuplicateId`] for repeated ids and
    /// [`SeedError::InvalidItem`] for items that fail draft validation.
    pub fn from_seed(seed: Vec<SeedItem>) -> Result<Self, SeedError> {
        let mut seen = HashSet::with_capacity(seed.len());
        let mut items = Vec::with_capacity(seed.len());

        for SeedItem { id, draft } in seed {
            if !seen.insert(id.clone()) {
                return Err(SeedError::DuplicateId {
                    entity: EntityKind::MenuItem,
                    id: id.into_inner(),
                });
            }
            let valid = draft.validate().map_err(|source| SeedError::InvalidItem {
                id: id.to_string(),
                source,
            })?;
            items.push(MenuItem::from_valid(id, valid));
        }

        Ok(Self { items })
    }

    /// All items in insertion order.
    #[must_use]
    pub fn list_items(&self) -> &[MenuItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id.as_str() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items matching a free-text query and a category selector.
    ///
    /// The category check and the text check are independent predicates
    /// combined with AND, so the result does not depend on which runs first.
    /// An empty query and an `All` selector return every item.
    #[must_use]
    pub fn filtered_items(
        &self,
        query: &str,
        category: impl Into<CategoryFilter>,
    ) -> Vec<MenuItem> {
        let category = category.into();
        let needle = query.to_lowercase();

        self.items
            .iter()
            .filter(|item| category.matches(item.category))
            .filter(|item| needle.is_empty() || item.mentions(&needle))
            .cloned()
            .collect()
    }

    /// Validate a draft and append it under a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the draft is invalid; nothing is added.
    pub fn add_item(&mut self, draft: &ItemDraft) -> Result<MenuItem, ValidationError> {
        let valid = draft.validate()?;
        let item = MenuItem::from_valid(self.fresh_id(), valid);
        self.items.push(item.clone());
        Ok(item)
    }

    /// Replace every mutable field of an item, keeping its id and position.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if `id` is absent, otherwise
    /// [`CatalogError::Validation`] if the draft is invalid. Either way the
    /// catalog is unchanged.
    pub fn update_item(&mut self, id: &str, draft: &ItemDraft) -> Result<MenuItem, CatalogError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id.as_str() == id)
            .ok_or_else(|| NotFoundError::menu_item(id))?;

        let valid = draft.validate()?;
        item.apply(valid);
        Ok(item.clone())
    }

    /// Remove an item permanently.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if `id` is absent.
    pub fn delete_item(&mut self, id: &str) -> Result<(), NotFoundError> {
        let position = self
            .items
            .iter()
            .position(|item| item.id.as_str() == id)
            .ok_or_else(|| NotFoundError::menu_item(id))?;
        self.items.remove(position);
        Ok(())
    }

    fn fresh_id(&self) -> MenuItemId {
        loop {
            let id = MenuItemId::generate();
            if self.get(id.as_str()).is_none() {
                return id;
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn seed_item(id: &str, name: &str, description: &str, price: &str, category: &str) -> SeedItem {
        SeedItem {
            id: MenuItemId::new(id),
            draft: ItemDraft {
                name: name.to_string(),
                description: description.to_string(),
                price: price.to_string(),
                category: category.to_string(),
                image: String::new(),
            },
        }
    }

    fn seeded() -> MenuCatalog {
        MenuCatalog::from_seed(vec![
            seed_item(
                "1",
                "Cappuccino",
                "Espresso with steamed milk and foam",
                "4.50",
                "Beverages",
            ),
            seed_item("2", "Croissant", "Buttery, flaky, viennoiserie pastry", "3.25", "Pastry"),
            seed_item("3", "Avocado Toast", "Multigrain toast with avocado", "8.95", "Breakfast"),
            seed_item("4", "Chocolate Cake", "Rich chocolate cake with ganache", "5.75", "Dessert"),
            seed_item("5", "Latte", "Espresso with steamed milk", "4.25", "Beverages"),
            seed_item("6", "Pain au Chocolat", "Chocolate-filled pastry", "3.50", "Pastry"),
        ])
        .unwrap()
    }

    fn draft(name: &str, price: &str, category: &str) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            description: String::new(),
            price: price.to_string(),
            category: category.to_string(),
            image: String::new(),
        }
    }

    fn ids(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_identity_filter_returns_everything() {
        let catalog = seeded();
        assert_eq!(catalog.filtered_items("", "all"), catalog.list_items());
    }

    #[test]
    fn test_category_filter_ignores_case() {
        let catalog = seeded();
        let beverages = catalog.filtered_items("", "beverages");
        assert_eq!(ids(&beverages), vec!["1", "5"]);
        assert_eq!(catalog.filtered_items("", "BEVERAGES"), beverages);
    }

    #[test]
    fn test_text_filter_matches_name_or_description() {
        let catalog = seeded();
        assert_eq!(ids(&catalog.filtered_items("chocolate", "all")), vec!["4", "6"]);
        assert_eq!(ids(&catalog.filtered_items("STEAMED", "all")), vec!["1", "5"]);
        assert!(catalog.filtered_items("bagel", "all").is_empty());
    }

    #[test]
    fn test_filters_are_conjunctive_and_commute() {
        let catalog = seeded();
        for query in ["", "chocolate", "espresso", "a", "zzz"] {
            for category in ["all", "pastry", "Beverages", "dessert", "soup"] {
                let combined = catalog.filtered_items(query, category);

                let category_first: Vec<MenuItem> = catalog
                    .filtered_items("", category)
                    .into_iter()
                    .filter(|item| catalog.filtered_items(query, "all").contains(item))
                    .collect();
                let text_first: Vec<MenuItem> = catalog
                    .filtered_items(query, "all")
                    .into_iter()
                    .filter(|item| catalog.filtered_items("", category).contains(item))
                    .collect();

                assert_eq!(combined, category_first, "query={query} category={category}");
                assert_eq!(combined, text_first, "query={query} category={category}");
            }
        }
    }

    #[test]
    fn test_filter_reflects_current_state() {
        let mut catalog = seeded();
        assert_eq!(catalog.filtered_items("", "dessert").len(), 1);
        catalog.add_item(&draft("Tiramisu", "6.00", "Dessert")).unwrap();
        assert_eq!(catalog.filtered_items("", "dessert").len(), 2);
        catalog.delete_item("4").unwrap();
        assert_eq!(catalog.filtered_items("", "dessert").len(), 1);
    }

    #[test]
    fn test_add_item_rejects_invalid_drafts() {
        let mut catalog = seeded();
        for bad in [
            draft("Mocha", "-1", "Beverages"),
            draft("Mocha", "abc", "Beverages"),
            draft("", "4.00", "Beverages"),
            draft("Mocha", "4.00", ""),
        ] {
            assert!(catalog.add_item(&bad).is_err());
            assert_eq!(catalog.len(), 6);
        }
    }

    #[test]
    fn test_add_item_appends_with_fresh_id() {
        let mut catalog = seeded();
        let added = catalog.add_item(&draft("Mocha", "4.75", "beverages")).unwrap();

        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.list_items().last().unwrap(), &added);
        assert_eq!(added.category, MenuCategory::Beverages);
        assert_eq!(added.price, Price::from_cents(475));
        let existing: Vec<_> = ids(catalog.list_items().get(..6).unwrap());
        assert!(!existing.contains(&added.id.as_str()));
    }

    #[test]
    fn test_update_after_add_preserves_id_and_position() {
        let mut catalog = seeded();
        let added = catalog.add_item(&draft("Mocha", "4.75", "Beverages")).unwrap();
        let position = catalog.len() - 1;

        let mut edit = ItemDraft::from(&added);
        edit.price = "5.00".to_string();
        let updated = catalog.update_item(added.id.as_str(), &edit).unwrap();

        assert_eq!(updated.id, added.id);
        assert_eq!(updated.name, added.name);
        assert_eq!(updated.category, added.category);
        assert_eq!(updated.price, Price::from_cents(500));
        assert_eq!(catalog.list_items().get(position).unwrap(), &updated);
    }

    #[test]
    fn test_update_errors_leave_catalog_unchanged() {
        let mut catalog = seeded();
        let before = catalog.list_items().to_vec();

        assert_eq!(
            catalog.update_item("99", &draft("Mocha", "4", "Beverages")),
            Err(CatalogError::NotFound(NotFoundError::menu_item("99")))
        );
        assert_eq!(
            catalog.update_item("1", &draft("Mocha", "0", "Beverages")),
            Err(CatalogError::Validation(ValidationError::NonPositivePrice))
        );
        assert_eq!(catalog.list_items(), before.as_slice());
    }

    #[test]
    fn test_update_replaces_image() {
        let mut catalog = seeded();
        let mut edit = ItemDraft::from(catalog.get("2").unwrap());
        edit.image = "https://img.example/croissant.jpg".to_string();
        let updated = catalog.update_item("2", &edit).unwrap();
        assert_eq!(
            updated.image.as_deref(),
            Some("https://img.example/croissant.jpg")
        );
    }

    #[test]
    fn test_delete_twice() {
        let mut catalog = seeded();
        assert_eq!(catalog.delete_item("3"), Ok(()));
        assert_eq!(catalog.len(), 5);
        assert!(catalog.get("3").is_none());
        assert_eq!(
            catalog.delete_item("3"),
            Err(NotFoundError::menu_item("3"))
        );
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_seed_validation() {
        let dup = MenuCatalog::from_seed(vec![
            seed_item("1", "Latte", "", "4", "Beverages"),
            seed_item("1", "Mocha", "", "4", "Beverages"),
        ]);
        assert!(matches!(dup, Err(SeedError::DuplicateId { .. })));

        let invalid =
            MenuCatalog::from_seed(vec![seed_item("9", "Latte", "", "free", "Beverages")]);
        assert_eq!(
            invalid.unwrap_err(),
            SeedError::InvalidItem {
                id: "9".to_string(),
                source: ValidationError::InvalidPrice("free".to_string()),
            }
        );
    }
}
