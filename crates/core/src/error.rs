//! Errors returned by the order ledger and menu catalog.
//!
//! Every error here is recoverable: the failed operation leaves the state it
//! targeted untouched.

use core::fmt;

use thiserror::Error;

/// Kind of entity a lookup was performed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Order,
    MenuItem,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Order => write!(f, "order"),
            Self::MenuItem => write!(f, "menu item"),
        }
    }
}

/// The referenced id does not exist at operation time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    /// What kind of entity was looked up.
    pub entity: EntityKind,
    /// The id that was not found.
    pub id: String,
}

impl NotFoundError {
    #[must_use]
    pub fn order(id: impl Into<String>) -> Self {
        Self {
            entity: EntityKind::Order,
            id: id.into(),
        }
    }

    #[must_use]
    pub fn menu_item(id: impl Into<String>) -> Self {
        Self {
            entity: EntityKind::MenuItem,
            id: id.into(),
        }
    }
}

/// A menu item draft failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is empty or whitespace.
    #[error("name is required")]
    EmptyName,
    /// Category is empty or whitespace.
    #[error("category is required")]
    EmptyCategory,
    /// Category does not name a known menu category.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    /// Price field is empty.
    #[error("price is required")]
    MissingPrice,
    /// Price is not a decimal number.
    #[error("price is not a valid number: {0}")]
    InvalidPrice(String),
    /// Price is zero or negative.
    #[error("price must be greater than zero")]
    NonPositivePrice,
}

impl ValidationError {
    /// Name of the draft field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::EmptyCategory | Self::UnknownCategory(_) => "category",
            Self::MissingPrice | Self::InvalidPrice(_) | Self::NonPositivePrice => "price",
        }
    }
}

/// Failure of an update against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Seed data violates an invariant of the core it was loaded into.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// Two seeded entities share an id.
    #[error("duplicate {entity} id in seed: {id}")]
    DuplicateId { entity: EntityKind, id: String },
    /// An order total is below zero.
    #[error("order {id} has a negative total")]
    NegativeTotal { id: String },
    /// A seeded menu item fails draft validation.
    #[error("menu item {id} is invalid: {source}")]
    InvalidItem {
        id: String,
        #[source]
        source: ValidationError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        assert_eq!(
            NotFoundError::order("ORD-404").to_string(),
            "order not found: ORD-404"
        );
        assert_eq!(
            NotFoundError::menu_item("7").to_string(),
            "menu item not found: 7"
        );
    }

    #[test]
    fn test_validation_fields() {
        assert_eq!(ValidationError::EmptyName.field(), "name");
        assert_eq!(
            ValidationError::UnknownCategory("Soup".to_string()).field(),
            "category"
        );
        assert_eq!(ValidationError::NonPositivePrice.field(), "price");
    }

    #[test]
    fn test_catalog_error_is_transparent() {
        let err = CatalogError::from(ValidationError::MissingPrice);
        assert_eq!(err.to_string(), "price is required");
    }
}
