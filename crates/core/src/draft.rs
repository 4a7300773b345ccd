//! Unvalidated menu item form buffer.
//!
//! An [`ItemDraft`] mirrors the editable fields of a menu item as raw text,
//! exactly as a form submits them. [`ItemDraft::validate`] is the only place
//! the text is coerced into typed fields; both the add and update paths of the
//! catalog go through it.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::MenuItem;
use crate::error::ValidationError;
use crate::types::{MenuCategory, Price};

/// Text fields of a menu item as entered by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    /// Price as typed, e.g. `"4.50"`.
    pub price: String,
    /// Category name, matched case-insensitively.
    pub category: String,
    /// Image URL; blank means no image.
    pub image: String,
}

/// The typed fields of a draft that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidItem {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: MenuCategory,
    pub image: Option<String>,
}

impl ItemDraft {
    /// Validate the draft and convert it into typed fields.
    ///
    /// Checks run in form order: name, price, category.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered:
    /// - `EmptyName` if the name is blank
    /// - `MissingPrice`, `InvalidPrice` or `NonPositivePrice` for a bad price
    /// - `EmptyCategory` or `UnknownCategory` for a bad category
    pub fn validate(&self) -> Result<ValidItem, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let price = parse_price(&self.price)?;

        let category_name = self.category.trim();
        if category_name.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        let category = MenuCategory::parse(category_name)
            .ok_or_else(|| ValidationError::UnknownCategory(category_name.to_string()))?;

        let image = Some(self.image.trim())
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        Ok(ValidItem {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            price,
            category,
            image,
        })
    }
}

impl From<&MenuItem> for ItemDraft {
    fn from(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.amount.to_string(),
            category: item.category.as_str().to_string(),
            image: item.image.clone().unwrap_or_default(),
        }
    }
}

/// Parse a user-entered price. Must be a finite decimal strictly above zero.
fn parse_price(raw: &str) -> Result<Price, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingPrice);
    }

    let amount =
        Decimal::from_str(raw).map_err(|_| ValidationError::InvalidPrice(raw.to_string()))?;
    let price = Price::new(amount);
    if !price.is_positive() {
        return Err(ValidationError::NonPositivePrice);
    }

    Ok(price)
}
