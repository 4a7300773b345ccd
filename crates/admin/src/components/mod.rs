//! Reusable view components for admin templates.

pub mod category_tabs;
pub mod select;

pub use category_tabs::CategoryTab;
pub use select::SelectOption;
