//! Menu listing.

use std::path::Path;

use cafe_core::CategoryFilter;
use tracing::info;

use super::load_cores;

/// Log every menu item passing the search and category filters.
///
/// # Errors
///
/// Returns an error if the seed cannot be loaded.
pub async fn list(
    seed: Option<&Path>,
    query: &str,
    category: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let (_, catalog) = load_cores(seed).await?;
    let filter = CategoryFilter::parse(category);
    let items = catalog.filtered_items(query.trim(), filter.clone());

    info!(
        matched = items.len(),
        total = catalog.len(),
        category = filter.key(),
        "Menu items"
    );
    for item in &items {
        info!(
            id = %item.id,
            category = %item.category,
            price = %item.price,
            "{}",
            item.name
        );
    }
    Ok(())
}
