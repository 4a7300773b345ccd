//! Application state shared across handlers.

use std::sync::Arc;

use cafe_core::{MenuCatalog, OrderLedger};
use tokio::sync::RwLock;

use crate::config::AdminConfig;
use crate::services::NotificationCenter;

/// Application state shared across all handlers.
///
/// Cheap to clone: all clones point at the same ledger, catalog and
/// notification queue. Each core sits behind its own lock so writes to one
/// never wait on the other.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    ledger: RwLock<OrderLedger>,
    catalog: RwLock<MenuCatalog>,
    notifications: Arc<NotificationCenter>,
}

impl AppState {
    /// Build the state and subscribe the notification center to the ledger.
    #[must_use]
    pub fn new(config: AdminConfig, mut ledger: OrderLedger, catalog: MenuCatalog) -> Self {
        let notifications = Arc::new(NotificationCenter::new(config.notification_limit));
        ledger.subscribe(notifications.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                ledger: RwLock::new(ledger),
                catalog: RwLock::new(catalog),
                notifications,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn ledger(&self) -> &RwLock<OrderLedger> {
        &self.inner.ledger
    }

    #[must_use]
    pub fn catalog(&self) -> &RwLock<MenuCatalog> {
        &self.inner.catalog
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationCenter {
        &self.inner.notifications
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.inner.config)
            .field("pending_toasts", &self.inner.notifications.pending())
            .finish_non_exhaustive()
    }
}
