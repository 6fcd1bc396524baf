//! Collaborator seams for the reconciliation engine.
//!
//! The two ledgers are read-only upstream services and the sink is a bulk
//! write target. Implementations live in `stocktally-infra`; the engine
//! depends only on these traits, so the fold can be exercised without any
//! network harness.

use std::sync::Arc;

use async_trait::async_trait;

use stocktally_core::{PurchaseRecord, SaleRecord, StockEntry};

use crate::error::{FetchError, PersistError};

/// Read-only access to the purchase ledger.
#[async_trait]
pub trait PurchaseLedger: Send + Sync {
    /// List every purchase record, in ledger order.
    async fn list_purchases(&self) -> Result<Vec<PurchaseRecord>, FetchError>;
}

/// Read-only access to the sales ledger.
#[async_trait]
pub trait SalesLedger: Send + Sync {
    /// List every sale record, in ledger order.
    async fn list_sales(&self) -> Result<Vec<SaleRecord>, FetchError>;
}

/// Bulk write target for computed snapshots.
///
/// The engine always posts the full freshly computed snapshot;
/// replace-vs-merge semantics belong to the sink.
#[async_trait]
pub trait StockSink: Send + Sync {
    /// Store a snapshot in one bulk write, upserting by item name.
    async fn save_snapshot(&self, entries: &[StockEntry]) -> Result<(), PersistError>;
}

#[async_trait]
impl<T> PurchaseLedger for Arc<T>
where
    T: PurchaseLedger + ?Sized,
{
    async fn list_purchases(&self) -> Result<Vec<PurchaseRecord>, FetchError> {
        (**self).list_purchases().await
    }
}

#[async_trait]
impl<T> SalesLedger for Arc<T>
where
    T: SalesLedger + ?Sized,
{
    async fn list_sales(&self) -> Result<Vec<SaleRecord>, FetchError> {
        (**self).list_sales().await
    }
}

#[async_trait]
impl<T> StockSink for Arc<T>
where
    T: StockSink + ?Sized,
{
    async fn save_snapshot(&self, entries: &[StockEntry]) -> Result<(), PersistError> {
        (**self).save_snapshot(entries).await
    }
}
