//! Account service REST client.

use std::time::Duration;

use log::debug;
use pnl_ledger::ClosedTrade;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use crate::AccountSource;
use crate::error::SourceError;
use crate::types::{BalanceResponse, TradesResponse};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking HTTP client for the account service.
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    /// Create a client for `base_url`; every request gives up after `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Other(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, SourceError> {
        let url = format!("{}{endpoint}", self.base_url);
        debug!("GET {url}");

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| SourceError::Connection(format!("{endpoint} request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp
            .text()
            .map_err(|e| SourceError::Connection(format!("{endpoint} body read failed: {e}")))?;

        serde_json::from_str(&body).map_err(|e| SourceError::Decode {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }
}

impl AccountSource for HttpSource {
    /// `GET /api/balance`
    fn balance(&self) -> Result<f64, SourceError> {
        self.get_json::<BalanceResponse>("/api/balance")
            .map(|r| r.balance)
    }

    /// `GET /api/trades`
    fn trades(&self) -> Result<Vec<ClosedTrade>, SourceError> {
        self.get_json::<TradesResponse>("/api/trades")
            .map(|r| r.trades)
    }
}
