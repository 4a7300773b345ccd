//! Order statistics.

use std::path::Path;

use tracing::info;

use super::load_cores;

const POPULAR_ITEMS_LIMIT: usize = 5;

/// Log status counts and the most popular line items.
///
/// # Errors
///
/// Returns an error if the seed cannot be loaded.
pub async fn stats(seed: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let (ledger, _) = load_cores(seed).await?;
    let counts = ledger.aggregate_counts();

    info!(
        pending = counts.pending,
        completed = counts.completed,
        cancelled = counts.cancelled,
        total = counts.total(),
        "Order counts"
    );
    for item in ledger.popular_items(POPULAR_ITEMS_LIMIT) {
        info!(orders = item.orders, "{}", item.name);
    }
    Ok(())
}
