//! In-memory collaborators for dev wiring and tests.

use std::sync::RwLock;

use async_trait::async_trait;

use stocktally_core::{PurchaseRecord, SaleRecord, StockEntry};
use stocktally_reconcile::{FetchError, PersistError, PurchaseLedger, SalesLedger, StockSink};

/// Seedable purchase/sale ledgers plus a snapshot store.
///
/// The stored snapshot is fully replaced on every save, mirroring the
/// replace semantics the engine assumes of the real sink.
#[derive(Debug, Default)]
pub struct InMemoryStockApi {
    purchases: RwLock<Vec<PurchaseRecord>>,
    sales: RwLock<Vec<SaleRecord>>,
    snapshot: RwLock<Vec<StockEntry>>,
}

impl InMemoryStockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_purchase(&self, record: PurchaseRecord) {
        if let Ok(mut ledger) = self.purchases.write() {
            ledger.push(record);
        }
    }

    pub fn record_sale(&self, record: SaleRecord) {
        if let Ok(mut ledger) = self.sales.write() {
            ledger.push(record);
        }
    }

    /// Last saved snapshot, empty if nothing was persisted yet.
    pub fn snapshot(&self) -> Vec<StockEntry> {
        match self.snapshot.read() {
            Ok(snapshot) => snapshot.clone(),
            Err(_) => vec![],
        }
    }
}

#[async_trait]
impl PurchaseLedger for InMemoryStockApi {
    async fn list_purchases(&self) -> Result<Vec<PurchaseRecord>, FetchError> {
        match self.purchases.read() {
            Ok(ledger) => Ok(ledger.clone()),
            Err(_) => Ok(vec![]),
        }
    }
}

#[async_trait]
impl SalesLedger for InMemoryStockApi {
    async fn list_sales(&self) -> Result<Vec<SaleRecord>, FetchError> {
        match self.sales.read() {
            Ok(ledger) => Ok(ledger.clone()),
            Err(_) => Ok(vec![]),
        }
    }
}

#[async_trait]
impl StockSink for InMemoryStockApi {
    async fn save_snapshot(&self, entries: &[StockEntry]) -> Result<(), PersistError> {
        if let Ok(mut snapshot) = self.snapshot.write() {
            *snapshot = entries.to_vec();
        }
        Ok(())
    }
}
