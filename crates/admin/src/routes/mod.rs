//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                    - Health check
//!
//! # Dashboard
//! GET  /                          - Summary cards, recent orders, popular items
//! POST /orders/{id}/status        - Change an order's status
//!
//! # Menu
//! GET  /menu                      - Menu listing (?query=&category=)
//! GET  /menu/new                  - Add item form
//! POST /menu                      - Create item
//! GET  /menu/{id}/edit            - Edit item form
//! POST /menu/{id}                 - Update item
//! POST /menu/{id}/delete          - Delete item
//!
//! # JSON API
//! GET    /api/orders              - List orders
//! GET    /api/orders/stats        - Status counts and popular items
//! POST   /api/orders/{id}/status  - Change an order's status
//! GET    /api/menu                - Filtered menu items
//! POST   /api/menu                - Create item
//! PUT    /api/menu/{id}           - Update item
//! DELETE /api/menu/{id}           - Delete item
//! ```

use axum::{
    Router,
    routing::{get, post},
};

use crate::services::Toast;
use crate::state::AppState;

pub mod api;
pub mod dashboard;
pub mod menu;
pub mod orders;

/// Build the page and API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        // Dashboard
        .route("/", get(dashboard::index))
        .route("/orders/{id}/status", post(orders::update_status))
        // Menu
        .route("/menu", get(menu::index).post(menu::create))
        .route("/menu/new", get(menu::new_item))
        .route("/menu/{id}/edit", get(menu::edit))
        .route("/menu/{id}", post(menu::update))
        .route("/menu/{id}/delete", post(menu::delete))
        // JSON API
        .nest("/api", api::routes())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Fields every page template shares with `base.html`.
#[derive(Debug, Clone)]
pub struct PageChrome {
    pub current_path: String,
    pub toasts: Vec<Toast>,
}

impl PageChrome {
    /// Take pending toasts for a page at `current_path`.
    #[must_use]
    pub fn new(state: &AppState, current_path: &str) -> Self {
        Self {
            current_path: current_path.to_string(),
            toasts: state.notifications().drain(),
        }
    }
}
