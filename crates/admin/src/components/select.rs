//! Options for `<select>` elements.

use cafe_core::{MenuCategory, OrderStatus};

/// Option for a select element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value.
    pub value: String,
    /// Display label.
    pub label: String,
    /// Whether the option is preselected.
    pub selected: bool,
}

impl SelectOption {
    #[must_use]
    pub fn new(value: &str, label: &str, selected: bool) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            selected,
        }
    }

    /// One option per order status, with `current` preselected.
    #[must_use]
    pub fn statuses(current: OrderStatus) -> Vec<Self> {
        OrderStatus::ALL
            .iter()
            .map(|status| Self::new(status.as_str(), status.label(), *status == current))
            .collect()
    }

    /// One option per menu category, preselecting the one matching `current`
    /// case-insensitively.
    #[must_use]
    pub fn categories(current: &str) -> Vec<Self> {
        let current = current.trim();
        MenuCategory::ALL
            .iter()
            .map(|category| {
                Self::new(
                    category.as_str(),
                    category.as_str(),
                    category.as_str().eq_ignore_ascii_case(current),
                )
            })
            .collect()
    }
}
