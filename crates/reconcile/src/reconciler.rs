//! Fetch → aggregate → persist orchestration.

use tracing::{info, warn};

use stocktally_core::StockEntry;

use crate::aggregate::aggregate_stock;
use crate::error::{LedgerKind, PersistError, ReconcileError};
use crate::source::{PurchaseLedger, SalesLedger, StockSink};

/// Outcome of a combined reconcile-and-persist run.
///
/// Entries are always present once aggregation ran; a sink failure travels
/// alongside them so the caller can present "computed but not saved"
/// distinctly from "failed to load data".
#[derive(Debug)]
pub struct ReconcileOutcome {
    pub entries: Vec<StockEntry>,
    pub persisted: Result<(), PersistError>,
}

/// Single-shot stock reconciler over the two ledgers and the sink.
///
/// Stateless between calls: every run fetches both ledgers, folds them in
/// memory, and optionally writes the snapshot. Nothing is retried and no
/// state survives a failed or cancelled run.
#[derive(Debug)]
pub struct StockReconciler<P, S, K> {
    purchases: P,
    sales: S,
    sink: K,
}

impl<P, S, K> StockReconciler<P, S, K>
where
    P: PurchaseLedger,
    S: SalesLedger,
    K: StockSink,
{
    pub fn new(purchases: P, sales: S, sink: K) -> Self {
        Self {
            purchases,
            sales,
            sink,
        }
    }

    /// Fetch both ledgers and fold them into a fresh snapshot.
    ///
    /// The two fetches have no ordering dependency and run concurrently;
    /// if either fails the run aborts with that ledger's error and nothing
    /// is aggregated. Malformed records are skipped and logged, never
    /// fatal.
    pub async fn reconcile(&self) -> Result<Vec<StockEntry>, ReconcileError> {
        let (purchases, sales) = tokio::try_join!(
            async {
                self.purchases
                    .list_purchases()
                    .await
                    .map_err(|source| ReconcileError::Fetch {
                        ledger: LedgerKind::Purchases,
                        source,
                    })
            },
            async {
                self.sales
                    .list_sales()
                    .await
                    .map_err(|source| ReconcileError::Fetch {
                        ledger: LedgerKind::Sales,
                        source,
                    })
            },
        )?;

        let aggregation = aggregate_stock(&purchases, &sales);
        for skip in &aggregation.skipped {
            warn!("skipping malformed ledger input: {skip}");
        }
        info!(
            purchases = purchases.len(),
            sales = sales.len(),
            items = aggregation.entries.len(),
            "stock reconciled"
        );

        Ok(aggregation.entries)
    }

    /// Submit a snapshot to the sink as one bulk write. No retry.
    pub async fn persist(&self, entries: &[StockEntry]) -> Result<(), ReconcileError> {
        self.sink.save_snapshot(entries).await?;
        Ok(())
    }

    /// Reconcile, then persist the result.
    ///
    /// A fetch failure is the only `Err` path. The computed entries are
    /// returned even when persistence fails, with the sink error carried in
    /// [`ReconcileOutcome::persisted`].
    pub async fn reconcile_and_persist(&self) -> Result<ReconcileOutcome, ReconcileError> {
        let entries = self.reconcile().await?;
        let persisted = self.sink.save_snapshot(&entries).await;
        if let Err(error) = &persisted {
            warn!("stock snapshot computed but not saved: {error}");
        }

        Ok(ReconcileOutcome { entries, persisted })
    }
}
