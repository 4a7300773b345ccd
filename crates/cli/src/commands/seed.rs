//! Seed file validation and export.

use std::path::Path;

use cafe_admin::seed::SeedFile;
use tracing::info;

use super::load_cores;

/// Load a seed file through the ledger and catalog, reporting what it holds.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if it breaks a
/// seed invariant (duplicate id, negative total, invalid menu item).
pub async fn validate(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let (ledger, catalog) = load_cores(Some(file)).await?;

    info!(
        orders = ledger.len(),
        menu_items = catalog.len(),
        "Seed file is valid"
    );
    Ok(())
}

/// Write the built-in seed to `out`.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub async fn export(out: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let seed = SeedFile::builtin()?;
    let yaml = seed.to_yaml()?;
    tokio::fs::write(out, yaml).await?;

    info!(
        path = %out.display(),
        orders = seed.orders.len(),
        menu_items = seed.menu.len(),
        "Exported built-in seed"
    );
    Ok(())
}
