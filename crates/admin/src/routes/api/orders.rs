//! Order API handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use cafe_core::{Order, OrderCounts, OrderStatus, PopularItem};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::AppError, state::AppState};

/// Number of entries in the stats popular items list.
const POPULAR_ITEMS_LIMIT: usize = 5;

/// Request body for a status change.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}

/// Aggregate order figures.
#[derive(Debug, Serialize)]
pub struct OrderStats {
    #[serde(flatten)]
    pub counts: OrderCounts,
    pub total: usize,
    pub popular_items: Vec<PopularItem>,
}

/// List all orders in ledger order.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Json<Vec<Order>> {
    Json(state.ledger().read().await.list_orders().to_vec())
}

/// Status counts and popular items.
#[instrument(skip(state))]
pub async fn stats(State(state): State<AppState>) -> Json<OrderStats> {
    let ledger = state.ledger().read().await;
    let counts = ledger.aggregate_counts();
    Json(OrderStats {
        counts,
        total: counts.total(),
        popular_items: ledger.popular_items(POPULAR_ITEMS_LIMIT),
    })
}

/// Change an order's status.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no order has `id`.
#[instrument(skip(state))]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<StatusUpdate>,
) -> Result<Json<Order>, AppError> {
    let order = state
        .ledger()
        .write()
        .await
        .update_status(&id, body.status)?;
    tracing::info!(order_id = %order.id, status = %order.status, "Order status updated via API");
    Ok(Json(order))
}
