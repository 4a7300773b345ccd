//! Menu management route handlers.
//!
//! Every mutation goes through the catalog first; toasts and redirects only
//! follow a result the catalog has already returned.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use cafe_core::{
    CatalogError, CategoryFilter, ItemDraft, MenuItem, NotFoundError, ValidationError,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    components::{CategoryTab, SelectOption},
    filters,
    state::AppState,
};

use super::PageChrome;

/// Query parameters for the menu page.
#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    pub query: Option<String>,
    pub category: Option<String>,
}

impl MenuQuery {
    pub(crate) fn search(&self) -> &str {
        self.query.as_deref().map_or("", str::trim)
    }

    pub(crate) fn filter(&self) -> CategoryFilter {
        CategoryFilter::parse(self.category.as_deref().unwrap_or_default())
    }
}

/// Menu item card.
#[derive(Debug, Clone)]
pub struct MenuItemView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub image: Option<String>,
}

impl From<&MenuItem> for MenuItemView {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.display(),
            category: item.category.as_str().to_string(),
            image: item.image.clone(),
        }
    }
}

/// Menu index page template.
#[derive(Template, WebTemplate)]
#[template(path = "menu/index.html")]
pub struct MenuIndexTemplate {
    pub chrome: PageChrome,
    pub items: Vec<MenuItemView>,
    pub tabs: Vec<CategoryTab>,
    pub search_query: String,
    pub category_key: String,
}

/// Add/edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "menu/form.html")]
pub struct MenuFormTemplate {
    pub chrome: PageChrome,
    pub title: String,
    pub action: String,
    pub submit_label: String,
    pub draft: ItemDraft,
    pub categories: Vec<SelectOption>,
    /// Field that failed validation, if any.
    pub invalid_field: Option<String>,
}

impl MenuFormTemplate {
    fn add(state: &AppState, draft: ItemDraft, invalid: Option<&ValidationError>) -> Self {
        Self::build(state, "Add New Item", "/menu", "Add Item", draft, invalid)
    }

    fn edit(
        state: &AppState,
        id: &str,
        draft: ItemDraft,
        invalid: Option<&ValidationError>,
    ) -> Self {
        Self::build(
            state,
            "Edit Menu Item",
            &format!("/menu/{id}"),
            "Update Item",
            draft,
            invalid,
        )
    }

    fn build(
        state: &AppState,
        title: &str,
        action: &str,
        submit_label: &str,
        draft: ItemDraft,
        invalid: Option<&ValidationError>,
    ) -> Self {
        Self {
            chrome: PageChrome::new(state, "/menu"),
            title: title.to_string(),
            action: action.to_string(),
            submit_label: submit_label.to_string(),
            categories: SelectOption::categories(&draft.category),
            draft,
            invalid_field: invalid.map(|e| e.field().to_string()),
        }
    }

    /// Whether `field` failed validation on the last submit.
    #[must_use]
    pub fn is_invalid(&self, field: &str) -> bool {
        self.invalid_field.as_deref() == Some(field)
    }
}

/// Menu index page handler.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> impl IntoResponse {
    let filter = query.filter();
    let search = query.search();

    let items: Vec<MenuItemView> = state
        .catalog()
        .read()
        .await
        .filtered_items(search, filter.clone())
        .iter()
        .map(MenuItemView::from)
        .collect();

    MenuIndexTemplate {
        chrome: PageChrome::new(&state, "/menu"),
        tabs: CategoryTab::build(&filter, search),
        search_query: search.to_string(),
        category_key: filter.key().to_string(),
        items,
    }
}

/// New item form handler.
#[instrument(skip(state))]
pub async fn new_item(State(state): State<AppState>) -> impl IntoResponse {
    MenuFormTemplate::add(&state, ItemDraft::default(), None)
}

/// Create item handler.
#[instrument(skip(state))]
pub async fn create(State(state): State<AppState>, Form(draft): Form<ItemDraft>) -> Response {
    let result = state.catalog().write().await.add_item(&draft);
    match result {
        Ok(item) => {
            tracing::info!(item_id = %item.id, name = %item.name, "Menu item created");
            state.notifications().success("Item added successfully");
            Redirect::to("/menu").into_response()
        }
        Err(e) => {
            tracing::info!(error = %e, "Rejected new menu item");
            state.notifications().error(e.to_string());
            let template = MenuFormTemplate::add(&state, draft, Some(&e));
            (StatusCode::BAD_REQUEST, template).into_response()
        }
    }
}

/// Edit item form handler, pre-filled from the stored item.
#[instrument(skip(state))]
pub async fn edit(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let draft = state.catalog().read().await.get(&id).map(ItemDraft::from);
    let Some(draft) = draft else {
        state
            .notifications()
            .error(NotFoundError::menu_item(&id).to_string());
        return Redirect::to("/menu").into_response();
    };

    MenuFormTemplate::edit(&state, &id, draft, None).into_response()
}

/// Update item handler.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(draft): Form<ItemDraft>,
) -> Response {
    let result = state.catalog().write().await.update_item(&id, &draft);
    match result {
        Ok(item) => {
            tracing::info!(item_id = %item.id, "Menu item updated");
            state.notifications().success("Item updated successfully");
            Redirect::to("/menu").into_response()
        }
        Err(CatalogError::NotFound(e)) => {
            tracing::warn!(item_id = %id, "Update for unknown menu item");
            state.notifications().error(e.to_string());
            Redirect::to("/menu").into_response()
        }
        Err(CatalogError::Validation(e)) => {
            tracing::info!(item_id = %id, error = %e, "Rejected menu item update");
            state.notifications().error(e.to_string());
            let template = MenuFormTemplate::edit(&state, &id, draft, Some(&e));
            (StatusCode::BAD_REQUEST, template).into_response()
        }
    }
}

/// Delete item handler.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    let result = state.catalog().write().await.delete_item(&id);
    match result {
        Ok(()) => {
            tracing::info!(item_id = %id, "Menu item deleted");
            state.notifications().success("Item deleted successfully");
        }
        Err(e) => {
            tracing::warn!(item_id = %id, "Delete for unknown menu item");
            state.notifications().error(e.to_string());
        }
    }
    Redirect::to("/menu")
}
