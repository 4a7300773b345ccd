//! Business logic services for admin.
//!
//! # Services
//!
//! - `notifications` - Bounded toast queue fed by handlers and ledger events

pub mod notifications;

pub use notifications::{NotificationCenter, Toast, ToastKind};
