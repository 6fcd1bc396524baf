//! `stocktally-infra` — boundary implementations for the reconciliation
//! engine.
//!
//! HTTP collaborators for the real ledger services and stock sink,
//! in-memory collaborators for dev/test wiring, and environment-based
//! configuration.

pub mod config;
pub mod http;
pub mod in_memory;

pub use config::HttpConfig;
pub use http::HttpStockApi;
pub use in_memory::InMemoryStockApi;
