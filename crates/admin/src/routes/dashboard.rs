//! Dashboard route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use cafe_core::{Order, OrderCounts, OrderLedger, OrderStatus, PopularItem};
use chrono::Local;
use tracing::instrument;

use crate::{
    components::SelectOption,
    filters::{self, clock_time},
    state::AppState,
};

use super::PageChrome;

/// Number of entries in the popular items card.
const POPULAR_ITEMS_LIMIT: usize = 5;

/// Order row for the recent orders table.
#[derive(Debug, Clone)]
pub struct RecentOrderView {
    pub id: String,
    pub customer: String,
    pub items: String,
    pub total: String,
    pub status: String,
    pub status_label: String,
    pub status_class: String,
    pub time: String,
    pub status_options: Vec<SelectOption>,
}

impl From<&Order> for RecentOrderView {
    fn from(order: &Order) -> Self {
        let status_class = match order.status {
            OrderStatus::Pending => "badge-pending",
            OrderStatus::Completed => "badge-completed",
            OrderStatus::Cancelled => "badge-cancelled",
        };

        Self {
            id: order.id.to_string(),
            customer: order.customer.clone(),
            items: order.items.join(", "),
            total: order.total.display(),
            status: order.status.as_str().to_string(),
            status_label: order.status.label().to_string(),
            status_class: status_class.to_string(),
            time: clock_time(&order.created_at.with_timezone(&Local)),
            status_options: SelectOption::statuses(order.status),
        }
    }
}

/// Summary card figures.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardMetrics {
    pub pending: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub total: usize,
}

impl From<OrderCounts> for DashboardMetrics {
    fn from(counts: OrderCounts) -> Self {
        Self {
            pending: counts.pending,
            completed: counts.completed,
            cancelled: counts.cancelled,
            total: counts.total(),
        }
    }
}

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub chrome: PageChrome,
    pub metrics: DashboardMetrics,
    pub recent_orders: Vec<RecentOrderView>,
    pub popular_items: Vec<PopularItem>,
}

/// Orders newest first. The ledger itself keeps insertion order.
fn recent_orders(ledger: &OrderLedger) -> Vec<RecentOrderView> {
    let mut orders: Vec<&Order> = ledger.list_orders().iter().collect();
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    orders.into_iter().map(RecentOrderView::from).collect()
}

/// Dashboard page handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let ledger = state.ledger().read().await;
    let metrics = DashboardMetrics::from(ledger.aggregate_counts());
    let recent_orders = recent_orders(&ledger);
    let popular_items = ledger.popular_items(POPULAR_ITEMS_LIMIT);
    drop(ledger);

    DashboardTemplate {
        chrome: PageChrome::new(&state, "/"),
        metrics,
        recent_orders,
        popular_items,
    }
}
