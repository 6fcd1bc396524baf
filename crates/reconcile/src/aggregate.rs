//! Pure aggregation of the two ledgers into a stock snapshot.
//!
//! The fold is synchronous, allocates nothing shared, and keeps all state
//! local to one call. Every run starts from zero; there is no incremental
//! update against a previous snapshot.

use std::collections::HashMap;

use stocktally_core::{LineItem, PurchaseRecord, SaleRecord, StockEntry};

use crate::error::LedgerKind;

/// Why a piece of ledger input contributed nothing to the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// The record carries no line-item sequence at all.
    MissingItems,
    /// A line's quantity was absent or not a usable number.
    UnparsableQuantity { line: usize },
    /// A line's item name was empty after trimming.
    BlankItemName { line: usize },
}

/// A skipped record or line, kept so the caller can log what was dropped.
///
/// One malformed record must not abort reconciliation for all the others,
/// so these are data, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    pub ledger: LedgerKind,
    /// Index of the record within its ledger.
    pub record: usize,
    pub reason: MalformedReason,
}

impl core::fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.reason {
            MalformedReason::MissingItems => {
                write!(f, "{} record {} has no items sequence", self.ledger, self.record)
            }
            MalformedReason::UnparsableQuantity { line } => write!(
                f,
                "{} record {} line {line} has an unparsable quantity",
                self.ledger, self.record
            ),
            MalformedReason::BlankItemName { line } => write!(
                f,
                "{} record {} line {line} has a blank item name",
                self.ledger, self.record
            ),
        }
    }
}

/// Result of one aggregation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    /// Snapshot entries, in first-seen order across purchases then sales.
    pub entries: Vec<StockEntry>,
    /// Input skipped under the skip-and-continue policy.
    pub skipped: Vec<MalformedRecord>,
}

/// Fold both ledgers into per-item stock totals.
///
/// Purchases are processed strictly before sales, each ledger in the order
/// its records arrive, so purchases establish the baseline that sales
/// subtract from. Only `available_quantity` is clamped at zero; the two
/// accumulated sums are exact.
pub fn aggregate_stock(purchases: &[PurchaseRecord], sales: &[SaleRecord]) -> Aggregation {
    let mut fold = StockFold::default();

    for (index, record) in purchases.iter().enumerate() {
        fold.push_record(LedgerKind::Purchases, index, record.items.as_deref());
    }
    for (index, record) in sales.iter().enumerate() {
        fold.push_record(LedgerKind::Sales, index, record.items.as_deref());
    }

    Aggregation {
        entries: fold.entries,
        skipped: fold.skipped,
    }
}

/// Insertion-ordered item mapping: `entries` keeps first-seen order, the
/// index map gives O(1) lookup by trimmed item name.
#[derive(Debug, Default)]
struct StockFold {
    entries: Vec<StockEntry>,
    index: HashMap<String, usize>,
    skipped: Vec<MalformedRecord>,
}

impl StockFold {
    fn push_record(&mut self, ledger: LedgerKind, record: usize, items: Option<&[LineItem]>) {
        let Some(items) = items else {
            self.skipped.push(MalformedRecord {
                ledger,
                record,
                reason: MalformedReason::MissingItems,
            });
            return;
        };

        for (line, item) in items.iter().enumerate() {
            let name = item.item_name.trim();
            if name.is_empty() {
                self.skipped.push(MalformedRecord {
                    ledger,
                    record,
                    reason: MalformedReason::BlankItemName { line },
                });
                continue;
            }
            let Some(quantity) = item.quantity else {
                self.skipped.push(MalformedRecord {
                    ledger,
                    record,
                    reason: MalformedReason::UnparsableQuantity { line },
                });
                continue;
            };

            match ledger {
                LedgerKind::Purchases => self.apply_purchase(name, quantity, item.unit.as_deref()),
                LedgerKind::Sales => self.apply_sale(name, quantity, item.unit.as_deref()),
            }
        }
    }

    fn apply_purchase(&mut self, name: &str, quantity: f64, unit: Option<&str>) {
        match self.index.get(name) {
            Some(&at) => {
                let entry = &mut self.entries[at];
                entry.purchase_quantity += quantity;
                entry.available_quantity += quantity;
                backfill_unit(entry, unit);
            }
            None => self.insert(StockEntry {
                item_name: name.to_string(),
                purchase_quantity: quantity,
                sale_quantity: 0.0,
                available_quantity: quantity,
                unit: unit.unwrap_or_default().to_string(),
            }),
        }
    }

    fn apply_sale(&mut self, name: &str, quantity: f64, unit: Option<&str>) {
        match self.index.get(name) {
            Some(&at) => {
                let entry = &mut self.entries[at];
                entry.sale_quantity += quantity;
                entry.available_quantity = (entry.available_quantity - quantity).max(0.0);
                backfill_unit(entry, unit);
            }
            // Sold but never purchased: the sale sum is kept, availability
            // floors at zero.
            None => self.insert(StockEntry {
                item_name: name.to_string(),
                purchase_quantity: 0.0,
                sale_quantity: quantity,
                available_quantity: (-quantity).max(0.0),
                unit: unit.unwrap_or_default().to_string(),
            }),
        }
    }

    fn insert(&mut self, entry: StockEntry) {
        self.index.insert(entry.item_name.clone(), self.entries.len());
        self.entries.push(entry);
    }
}

/// Keep the first non-empty unit seen for an item.
fn backfill_unit(entry: &mut StockEntry, unit: Option<&str>) {
    if entry.unit.is_empty() {
        if let Some(unit) = unit.filter(|u| !u.is_empty()) {
            entry.unit = unit.to_string();
        }
    }
}
