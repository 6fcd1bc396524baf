use serde::{Deserialize, Serialize};

/// Derived stock level for one item within a snapshot.
///
/// A snapshot is rebuilt from scratch on every reconciliation run and
/// replaces whatever the sink held before.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockEntry {
    /// Identity; unique within a snapshot.
    pub item_name: String,
    /// Sum of all purchase line-item quantities for this item (never clamped).
    pub purchase_quantity: f64,
    /// Sum of all sale line-item quantities for this item (never clamped).
    pub sale_quantity: f64,
    /// Remaining stock, floored at zero. Oversold inventory shows as `0`,
    /// not as a negative count.
    pub available_quantity: f64,
    /// First non-empty unit seen for this item, empty if none.
    #[serde(default)]
    pub unit: String,
}
