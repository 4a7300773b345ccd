//! Order status form handler.

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use cafe_core::OrderStatus;
use serde::Deserialize;
use tracing::instrument;

use crate::{error::AppError, state::AppState};

/// Form input for a status change.
#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: String,
}

/// Apply a status change and return to the dashboard.
///
/// The success toast comes from the ledger's status listener. An unknown
/// order id becomes an error toast; a status value outside the enum is a
/// malformed request.
///
/// # Errors
///
/// Returns `AppError::BadRequest` if `status` is not a known order status.
#[instrument(skip(state))]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<StatusForm>,
) -> Result<impl IntoResponse, AppError> {
    let status: OrderStatus = form.status.parse().map_err(AppError::BadRequest)?;

    let result = state.ledger().write().await.update_status(&id, status);
    match result {
        Ok(order) => {
            tracing::info!(order_id = %order.id, status = %order.status, "Order status updated");
        }
        Err(e) => {
            tracing::warn!(order_id = %id, error = %e, "Status update for unknown order");
            state.notifications().error(e.to_string());
        }
    }

    Ok(Redirect::to("/"))
}
