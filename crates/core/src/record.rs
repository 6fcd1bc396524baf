use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::quantity;

/// One item-quantity-unit triple within a purchase or sale record.
///
/// Field names follow the ledger services' JSON (`itemName`, `unitPrice`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Item identity: case-sensitive, trimmed at the aggregation boundary.
    pub item_name: String,
    /// `None` when the source field is missing or not a usable number.
    #[serde(default, deserialize_with = "quantity::lenient")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Purchase ledgers carry a price per line; not consumed by reconciliation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
}

impl LineItem {
    pub fn new(item_name: impl Into<String>, quantity: f64) -> Self {
        Self {
            item_name: item_name.into(),
            quantity: Some(quantity),
            unit: None,
            unit_price: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

/// A purchase ledger record (stock in). Only `items` is consumed by
/// reconciliation; the remaining fields document the wire shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
    /// Missing on malformed records; read as an empty sequence downstream.
    #[serde(default)]
    pub items: Option<Vec<LineItem>>,
}

impl PurchaseRecord {
    pub fn with_items(items: Vec<LineItem>) -> Self {
        Self {
            items: Some(items),
            ..Self::default()
        }
    }
}

/// A sales ledger record (stock out), same line-item shape as purchases.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    /// Missing on malformed records; read as an empty sequence downstream.
    #[serde(default)]
    pub items: Option<Vec<LineItem>>,
}

impl SaleRecord {
    pub fn with_items(items: Vec<LineItem>) -> Self {
        Self { items: Some(items) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn purchase_record_decodes_ledger_json() {
        let record: PurchaseRecord = serde_json::from_value(json!({
            "supplier": "City Wholesale",
            "purchaseDate": "2024-03-12",
            "items": [
                { "itemName": "Rice", "quantity": 50, "unit": "kg", "unitPrice": 1.8 },
                { "itemName": "Oil", "quantity": "10", "unit": "liter" }
            ],
            "total": 108.0
        }))
        .unwrap();

        let items = record.items.as_deref().unwrap();
        assert_eq!(items[0].item_name, "Rice");
        assert_eq!(items[0].quantity, Some(50.0));
        assert_eq!(items[0].unit.as_deref(), Some("kg"));
        assert_eq!(items[1].quantity, Some(10.0));
        assert_eq!(record.supplier.as_deref(), Some("City Wholesale"));
    }

    #[test]
    fn missing_items_sequence_decodes_to_none() {
        let record: SaleRecord = serde_json::from_value(json!({ "customer": "walk-in" })).unwrap();
        assert_eq!(record.items, None);
    }

    #[test]
    fn unparsable_quantity_does_not_fail_the_record() {
        let record: SaleRecord = serde_json::from_value(json!({
            "items": [{ "itemName": "Sugar", "quantity": "plenty" }]
        }))
        .unwrap();

        assert_eq!(record.items.as_deref().unwrap()[0].quantity, None);
    }
}
