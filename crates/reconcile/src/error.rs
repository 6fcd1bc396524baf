//! Reconciliation error model.

use thiserror::Error;

/// Which ledger an input record or a fetch failure came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LedgerKind {
    Purchases,
    Sales,
}

impl core::fmt::Display for LedgerKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LedgerKind::Purchases => f.write_str("purchases"),
            LedgerKind::Sales => f.write_str("sales"),
        }
    }
}

/// A ledger source was unreachable or returned an unusable response.
///
/// Hard failure: the run aborts without aggregating. A snapshot missing one
/// whole ledger would be worse than no snapshot at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network or transport failure (includes cancellation and timeouts).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("unexpected status {code}")]
    Status { code: u16 },

    /// The response body could not be decoded.
    #[error("payload decode failed: {0}")]
    Decode(String),
}

/// The sink rejected the snapshot write.
///
/// Non-fatal to the computation: the entries are still returned to the
/// caller, and no retry happens at this layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersistError {
    /// Network or transport failure.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The sink answered with a non-success status and no usable detail.
    #[error("unexpected status {code}")]
    Status { code: u16 },

    /// The sink refused the data and said why.
    #[error("snapshot rejected: {0}")]
    Rejected(String),
}

/// Failure of a reconciliation run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    /// Either ledger fetch failed; nothing was aggregated.
    #[error("failed to fetch {ledger} ledger: {source}")]
    Fetch {
        ledger: LedgerKind,
        source: FetchError,
    },

    /// The computed snapshot could not be persisted.
    #[error("failed to persist stock snapshot: {0}")]
    Persist(#[from] PersistError),
}
