//! The order ledger: authoritative in-memory list of café orders.
//!
//! Orders arrive from seed data (standing in for an order intake process) and
//! afterwards change only through [`OrderLedger::update_status`]. Aggregate
//! counts are always recomputed from the list.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EntityKind, NotFoundError, SeedError};
use crate::types::{OrderId, OrderStatus, Price};

/// A customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: String,
    /// Line-item names, display only.
    pub items: Vec<String>,
    pub total: Price,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Number of orders in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCounts {
    pub pending: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl OrderCounts {
    /// Count for a single status.
    #[must_use]
    pub const fn get(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::Pending => self.pending,
            OrderStatus::Completed => self.completed,
            OrderStatus::Cancelled => self.cancelled,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.pending + self.completed + self.cancelled
    }
}

/// How many orders contain a given line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularItem {
    pub name: String,
    pub orders: usize,
}

/// Emitted after every successful status update, including no-op ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusChanged {
    pub order_id: OrderId,
    pub from: OrderStatus,
    pub to: OrderStatus,
}

impl StatusChanged {
    /// Whether the update actually moved the order to a different status.
    #[must_use]
    pub fn is_transition(&self) -> bool {
        self.from != self.to
    }
}

/// Observer of ledger status changes.
///
/// Listeners are notified synchronously after the mutation is applied. They
/// cannot veto or alter it.
pub trait StatusListener: Send + Sync {
    fn status_changed(&self, event: &StatusChanged);
}

/// The authoritative collection of orders.
#[derive(Default)]
pub struct OrderLedger {
    orders: Vec<Order>,
    listeners: Vec<Arc<dyn StatusListener>>,
}

impl fmt::Debug for OrderLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderLedger")
            .field("orders", &self.orders)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl OrderLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from seed orders, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::DuplicateId`] if two orders share an id and
    /// [`SeedError::NegativeTotal`] if any total is below zero.
    pub fn from_seed(orders: Vec<Order>) -> Result<Self, SeedError> {
        let mut seen = HashSet::with_capacity(orders.len());
        for order in &orders {
            if !seen.insert(order.id.as_str()) {
                return Err(SeedError::DuplicateId {
                    entity: EntityKind::Order,
                    id: order.id.to_string(),
                });
            }
            if order.total.is_negative() {
                return Err(SeedError::NegativeTotal {
                    id: order.id.to_string(),
                });
            }
        }

        Ok(Self {
            orders,
            listeners: Vec::new(),
        })
    }

    /// Register an observer for status changes.
    pub fn subscribe(&mut self, listener: Arc<dyn StatusListener>) {
        self.listeners.push(listener);
    }

    /// All orders in insertion order.
    #[must_use]
    pub fn list_orders(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id.as_str() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Count orders per status by walking the list.
    #[must_use]
    pub fn aggregate_counts(&self) -> OrderCounts {
        self.orders
            .iter()
            .fold(OrderCounts::default(), |mut counts, order| {
                match order.status {
                    OrderStatus::Pending => counts.pending += 1,
                    OrderStatus::Completed => counts.completed += 1,
                    OrderStatus::Cancelled => counts.cancelled += 1,
                }
                counts
            })
    }

    /// Set the status of an order and return the updated order.
    ///
    /// Only `status` changes; the order keeps its position. Setting the
    /// current status again succeeds and still notifies listeners.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if no order has `id`. The ledger is unchanged.
    pub fn update_status(
        &mut self,
        id: &str,
        new_status: OrderStatus,
    ) -> Result<Order, NotFoundError> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id.as_str() == id)
            .ok_or_else(|| NotFoundError::order(id))?;

        let event = StatusChanged {
            order_id: order.id.clone(),
            from: order.status,
            to: new_status,
        };
        order.status = new_status;
        let updated = order.clone();

        for listener in &self.listeners {
            listener.status_changed(&event);
        }

        Ok(updated)
    }

    /// Line items ranked by how many orders contain them.
    ///
    /// An item listed twice in one order counts once for that order. Ties are
    /// broken alphabetically.
    #[must_use]
    pub fn popular_items(&self, limit: usize) -> Vec<PopularItem> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for order in &self.orders {
            let unique: HashSet<&str> = order.items.iter().map(String::as_str).collect();
            for name in unique {
                *counts.entry(name).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<PopularItem> = counts
            .into_iter()
            .map(|(name, orders)| PopularItem {
                name: name.to_string(),
                orders,
            })
            .collect();
        ranked.sort_by(|a, b| b.orders.cmp(&a.orders).then_with(|| a.name.cmp(&b.name)));
        ranked.truncate(limit);
        ranked
    }
}
