//! Cafe Desk Core - order ledger, menu catalog and shared types.
//!
//! This crate holds the state of the café back office and the rules that
//! govern it:
//! - [`OrderLedger`] - orders, their status transitions and aggregate counts
//! - [`MenuCatalog`] - menu items with create/update/delete and filtering
//! - [`ItemDraft`] - the unvalidated form buffer behind menu edits
//!
//! # Architecture
//!
//! The core crate has no I/O, no HTTP and no global state. Each state holder
//! is a plain value owned by whoever constructs it; the `admin` server wraps
//! them in locks, tests build fresh ones per case.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, statuses and categories
//! - [`ledger`] - The order ledger and its status-change observer
//! - [`catalog`] - The menu catalog
//! - [`draft`] - Item drafts and their validation
//! - [`error`] - Not-found, validation and seed errors

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod draft;
pub mod error;
pub mod ledger;
pub mod types;

pub use catalog::{MenuCatalog, MenuItem, SeedItem};
pub use draft::{ItemDraft, ValidItem};
pub use error::{CatalogError, EntityKind, NotFoundError, SeedError, ValidationError};
pub use ledger::{
    Order, OrderCounts, OrderLedger, PopularItem, StatusChanged, StatusListener,
};
pub use types::*;
