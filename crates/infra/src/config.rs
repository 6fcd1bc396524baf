//! Environment-based configuration for the HTTP collaborators.

use std::time::Duration;

use anyhow::Context;

/// Where the ledger services and the stock sink live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Base URL the `purchases`, `sales`, and `stock` endpoints hang off.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl HttpConfig {
    /// Read configuration from the environment.
    ///
    /// `STOCK_API_BASE_URL` and `STOCK_API_TIMEOUT_SECS` override the
    /// defaults; unset variables keep them.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("STOCK_API_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(raw) = std::env::var("STOCK_API_TIMEOUT_SECS") {
            let secs: u64 = raw
                .parse()
                .context("STOCK_API_TIMEOUT_SECS must be a whole number of seconds")?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
