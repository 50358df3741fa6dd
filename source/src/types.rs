//! Account service response bodies.

use pnl_ledger::ClosedTrade;
use serde::Deserialize;

/// `GET /api/balance` response.
#[derive(Debug, Deserialize)]
pub struct BalanceResponse {
    pub balance: f64,
}

/// `GET /api/trades` response.
#[derive(Debug, Deserialize)]
pub struct TradesResponse {
    #[serde(default)]
    pub trades: Vec<ClosedTrade>,
}
