//! `stocktally-reconcile` — the stock reconciliation engine.
//!
//! Derives current stock levels for every item from the two append-only
//! ledgers (purchases in, sales out) and persists the derived state as a
//! full snapshot. The aggregation fold is a pure function of the two
//! ledgers; fetching and persisting happen at the edges, behind the
//! collaborator traits in [`source`].

pub mod aggregate;
pub mod error;
pub mod reconciler;
pub mod source;

pub use aggregate::{Aggregation, MalformedReason, MalformedRecord, aggregate_stock};
pub use error::{FetchError, LedgerKind, PersistError, ReconcileError};
pub use reconciler::{ReconcileOutcome, StockReconciler};
pub use source::{PurchaseLedger, SalesLedger, StockSink};
