//! JSON API mirroring the HTML pages.
//!
//! Errors use the same [`AppError`](crate::error::AppError) mapping as the
//! pages: 404 for unknown ids, 422 for drafts that fail validation.

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

pub mod menu;
pub mod orders;

/// Build the `/api` routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(orders::list))
        .route("/orders/stats", get(orders::stats))
        .route("/orders/{id}/status", post(orders::update_status))
        .route("/menu", get(menu::list).post(menu::create))
        .route("/menu/{id}", put(menu::update).delete(menu::delete))
}
