//! Seed data for the order ledger and menu catalog.
//!
//! Nothing is persisted: every start loads either the built-in demo data or a
//! YAML file named by `CAFE_SEED_FILE`. Orders may give an absolute
//! `created_at` or a relative `minutes_ago`, resolved against the load time.
//!
//! Menu fields are read as form text, so numeric-looking scalars must be
//! quoted: `id: "1"` and `price: "4.50"`. An unquoted `price: 4.50` is a YAML
//! error rather than a silently reformatted `4.5`.

use std::path::{Path, PathBuf};

use cafe_core::{
    MenuCatalog, Order, OrderId, OrderLedger, OrderStatus, Price, SeedError, SeedItem,
};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUILTIN_SEED: &str = include_str!("../seed/default.yaml");

/// Errors loading a seed file.
#[derive(Debug, Error)]
pub enum SeedLoadError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid seed YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Seed data rejected: {0}")]
    Rejected(#[from] SeedError),
    #[error("Order {id}: minutes_ago {minutes} is out of range")]
    TimestampOutOfRange { id: OrderId, minutes: i64 },
}

/// An order as written in a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedOrder {
    pub id: OrderId,
    pub customer: String,
    #[serde(default)]
    pub items: Vec<String>,
    pub total: Decimal,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes_ago: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl SeedOrder {
    /// Resolve into a ledger order. `created_at` wins over `minutes_ago`;
    /// with neither the order is stamped `now`.
    ///
    /// # Errors
    ///
    /// Returns `SeedLoadError::TimestampOutOfRange` if `minutes_ago` cannot
    /// be subtracted from `now`.
    pub fn into_order(self, now: DateTime<Utc>) -> Result<Order, SeedLoadError> {
        let created_at = match (self.created_at, self.minutes_ago) {
            (Some(at), _) => at,
            (None, Some(minutes)) => Duration::try_minutes(minutes)
                .and_then(|ago| now.checked_sub_signed(ago))
                .ok_or_else(|| SeedLoadError::TimestampOutOfRange {
                    id: self.id.clone(),
                    minutes,
                })?,
            (None, None) => now,
        };

        Ok(Order {
            id: self.id,
            customer: self.customer,
            items: self.items,
            total: Price::new(self.total),
            status: self.status,
            created_at,
        })
    }
}

/// Contents of a seed file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub orders: Vec<SeedOrder>,
    #[serde(default)]
    pub menu: Vec<SeedItem>,
}

impl SeedFile {
    /// The demo data compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `SeedLoadError::Yaml` if the embedded file fails to parse.
    pub fn builtin() -> Result<Self, SeedLoadError> {
        Self::from_yaml(BUILTIN_SEED)
    }

    /// Parse seed YAML.
    ///
    /// # Errors
    ///
    /// Returns `SeedLoadError::Yaml` for malformed input.
    pub fn from_yaml(yaml: &str) -> Result<Self, SeedLoadError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a seed file from disk.
    ///
    /// # Errors
    ///
    /// Returns `SeedLoadError::Io` if the file cannot be read and
    /// `SeedLoadError::Yaml` if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, SeedLoadError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| SeedLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    /// Load from `path` if given, otherwise the built-in seed.
    ///
    /// # Errors
    ///
    /// See [`SeedFile::load`] and [`SeedFile::builtin`].
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, SeedLoadError> {
        path.map_or_else(Self::builtin, Self::load)
    }

    /// Serialize back to YAML.
    ///
    /// # Errors
    ///
    /// Returns `SeedLoadError::Yaml` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, SeedLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Build both cores, checking every seed invariant.
    ///
    /// # Errors
    ///
    /// Returns `SeedLoadError::Rejected` for duplicate ids, negative totals or
    /// menu items that fail validation, and
    /// `SeedLoadError::TimestampOutOfRange` for an unusable `minutes_ago`.
    pub fn into_cores(
        self,
        now: DateTime<Utc>,
    ) -> Result<(OrderLedger, MenuCatalog), SeedLoadError> {
        let orders = self
            .orders
            .into_iter()
            .map(|order| order.into_order(now))
            .collect::<Result<_, _>>()?;
        let ledger = OrderLedger::from_seed(orders)?;
        let catalog = MenuCatalog::from_seed(self.menu)?;
        Ok((ledger, catalog))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cafe_core::{CategoryFilter, EntityKind, OrderCounts};

    use super::*;

    #[test]
    fn test_builtin_seed_loads() {
        let now = Utc::now();
        let (ledger, catalog) = SeedFile::builtin().unwrap().into_cores(now).unwrap();

        assert_eq!(ledger.len(), 5);
        assert_eq!(catalog.len(), 6);
        assert_eq!(
            ledger.aggregate_counts(),
            OrderCounts {
                pending: 2,
                completed: 2,
                cancelled: 1
            }
        );
        assert_eq!(
            catalog.filtered_items("", CategoryFilter::parse("beverages")).len(),
            2
        );

        let first = ledger.get("ORD-001").unwrap();
        assert_eq!(first.created_at, now - Duration::minutes(15));
        assert_eq!(first.total, Price::from_cents(850));
    }

    #[test]
    fn test_created_at_wins_over_minutes_ago() {
        let yaml = r#"
orders:
  - id: ORD-100
    customer: Ada
    total: "3.00"
    minutes_ago: 10
    created_at: 2026-01-02T09:30:00Z
"#;
        let now = Utc::now();
        let seed = SeedFile::from_yaml(yaml).unwrap();
        let order = seed
            .orders
            .into_iter()
            .next()
            .unwrap()
            .into_order(now)
            .unwrap();
        assert_eq!(order.created_at.to_rfc3339(), "2026-01-02T09:30:00+00:00");
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.items.is_empty());
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let seed = SeedFile::from_yaml("menu: []").unwrap();
        assert!(seed.orders.is_empty());
        let (ledger, catalog) = seed.into_cores(Utc::now()).unwrap();
        assert!(ledger.is_empty());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_duplicate_order_rejected() {
        let yaml = r#"
orders:
  - { id: ORD-1, customer: A, total: "1.00" }
  - { id: ORD-1, customer: B, total: "2.00" }
"#;
        let err = SeedFile::from_yaml(yaml)
            .unwrap()
            .into_cores(Utc::now())
            .unwrap_err();
        assert!(matches!(
            err,
            SeedLoadError::Rejected(SeedError::DuplicateId {
                entity: EntityKind::Order,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_menu_item_rejected() {
        let yaml = r#"
menu:
  - { id: "1", name: Tea, price: "-2", category: Beverages }
"#;
        let err = SeedFile::from_yaml(yaml)
            .unwrap()
            .into_cores(Utc::now())
            .unwrap_err();
        assert!(matches!(
            err,
            SeedLoadError::Rejected(SeedError::InvalidItem { .. })
        ));
    }

    #[test]
    fn test_out_of_range_minutes_ago_rejected() {
        let yaml = r#"
orders:
  - { id: ORD-1, customer: A, total: "1.00", minutes_ago: 9223372036854775807 }
"#;
        let err = SeedFile::from_yaml(yaml)
            .unwrap()
            .into_cores(Utc::now())
            .unwrap_err();
        match err {
            SeedLoadError::TimestampOutOfRange { id, minutes } => {
                assert_eq!(id.as_str(), "ORD-1");
                assert_eq!(minutes, i64::MAX);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_minutes_ago_is_in_the_future() {
        let now = Utc::now();
        let yaml = r#"
orders:
  - { id: ORD-2, customer: B, total: "1.00", minutes_ago: -10 }
"#;
        let (ledger, _) = SeedFile::from_yaml(yaml)
            .unwrap()
            .into_cores(now)
            .unwrap();
        assert_eq!(
            ledger.get("ORD-2").unwrap().created_at,
            now + Duration::minutes(10)
        );
    }

    #[test]
    fn test_unquoted_menu_scalars_rejected() {
        let yaml = r#"
menu:
  - { id: "1", name: Tea, price: 4.50, category: Beverages }
"#;
        assert!(matches!(
            SeedFile::from_yaml(yaml),
            Err(SeedLoadError::Yaml(_))
        ));

        let quoted = SeedFile::from_yaml(&yaml.replace("4.50", "\"4.50\"")).unwrap();
        assert_eq!(quoted.menu.first().unwrap().draft.price, "4.50");
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        assert!(matches!(
            SeedFile::from_yaml("orders: {"),
            Err(SeedLoadError::Yaml(_))
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = SeedFile::load(Path::new("/nonexistent/seed.yaml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/seed.yaml"));
    }

    #[test]
    fn test_yaml_export_reloads() {
        let seed = SeedFile::builtin().unwrap();
        let yaml = seed.to_yaml().unwrap();
        assert_eq!(SeedFile::from_yaml(&yaml).unwrap(), seed);
    }
}
