//! `stocktally-core` — domain foundation for stock reconciliation.
//!
//! This crate contains **pure domain** types (no infrastructure concerns):
//! the ledger record shapes consumed by the reconciler and the stock entry
//! it derives.

pub mod quantity;
pub mod record;
pub mod stock;

pub use record::{LineItem, PurchaseRecord, SaleRecord};
pub use stock::StockEntry;
