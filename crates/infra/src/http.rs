//! HTTP implementations of the ledger and sink collaborators.

use anyhow::Context;
use async_trait::async_trait;
use tracing::debug;

use stocktally_core::{PurchaseRecord, SaleRecord, StockEntry};
use stocktally_reconcile::{FetchError, PersistError, PurchaseLedger, SalesLedger, StockSink};

use crate::config::HttpConfig;

/// JSON client for the ledger services and the stock sink.
///
/// One instance implements all three collaborator traits; share it behind
/// an `Arc` to wire a `StockReconciler` against a single upstream service.
#[derive(Debug, Clone)]
pub struct HttpStockApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpStockApi {
    pub fn new(config: &HttpConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build http client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, FetchError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!(%url, "fetching ledger");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl PurchaseLedger for HttpStockApi {
    async fn list_purchases(&self) -> Result<Vec<PurchaseRecord>, FetchError> {
        self.get_json("purchases").await
    }
}

#[async_trait]
impl SalesLedger for HttpStockApi {
    async fn list_sales(&self) -> Result<Vec<SaleRecord>, FetchError> {
        self.get_json("sales").await
    }
}

#[async_trait]
impl StockSink for HttpStockApi {
    async fn save_snapshot(&self, entries: &[StockEntry]) -> Result<(), PersistError> {
        let url = self.endpoint("stock");
        debug!(%url, entries = entries.len(), "saving stock snapshot");

        let response = self
            .http
            .post(&url)
            .json(&entries)
            .send()
            .await
            .map_err(|e| PersistError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // The sink reports rejections as `{"error": "..."}`; surface that
        // detail when present.
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error")?.as_str().map(String::from));

        Err(match detail {
            Some(message) => PersistError::Rejected(message),
            None => PersistError::Status {
                code: status.as_u16(),
            },
        })
    }
}
