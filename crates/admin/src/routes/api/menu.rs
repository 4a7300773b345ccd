//! Menu API handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use cafe_core::{ItemDraft, MenuItem};
use tracing::instrument;

use crate::{error::AppError, routes::menu::MenuQuery, state::AppState};

/// Menu items matching `?query=` and `?category=`.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> Json<Vec<MenuItem>> {
    Json(
        state
            .catalog()
            .read()
            .await
            .filtered_items(query.search(), query.filter()),
    )
}

/// Create a menu item from a draft.
///
/// # Errors
///
/// Returns `AppError::Validation` if the draft is invalid.
#[instrument(skip(state))]
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<ItemDraft>,
) -> Result<(StatusCode, Json<MenuItem>), AppError> {
    let item = state.catalog().write().await.add_item(&draft)?;
    tracing::info!(item_id = %item.id, name = %item.name, "Menu item created via API");
    Ok((StatusCode::CREATED, Json(item)))
}

/// Replace a menu item's fields with a draft.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown id and `AppError::Validation`
/// if the draft is invalid.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<ItemDraft>,
) -> Result<Json<MenuItem>, AppError> {
    let item = state.catalog().write().await.update_item(&id, &draft)?;
    tracing::info!(item_id = %item.id, "Menu item updated via API");
    Ok(Json(item))
}

/// Remove a menu item.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown id.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.catalog().write().await.delete_item(&id)?;
    tracing::info!(item_id = %id, "Menu item deleted via API");
    Ok(StatusCode::NO_CONTENT)
}
