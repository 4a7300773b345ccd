//! Core types for Cafe Desk.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod price;
pub mod status;

pub use category::{CategoryFilter, MenuCategory};
pub use id::*;
pub use price::Price;
pub use status::*;
