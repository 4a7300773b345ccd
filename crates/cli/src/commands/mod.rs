//! Subcommand implementations.

pub mod menu;
pub mod orders;
pub mod seed;

use std::path::Path;

use cafe_admin::seed::SeedFile;
use cafe_core::{MenuCatalog, OrderLedger};
use tracing::info;

/// Read a seed file (or the built-in seed) and build both cores.
pub(crate) async fn load_cores(
    seed: Option<&Path>,
) -> Result<(OrderLedger, MenuCatalog), Box<dyn std::error::Error>> {
    let file = match seed {
        Some(path) => {
            info!(path = %path.display(), "Loading seed file");
            let content = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
            SeedFile::from_yaml(&content)?
        }
        None => SeedFile::builtin()?,
    };

    Ok(file.into_cores(chrono::Utc::now())?)
}
