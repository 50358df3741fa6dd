//! Mock account source for testing — implements `AccountSource` with configurable behavior.
//!
//! ```ignore
//! use pnl_ledger_source::mock::MockSource;
//!
//! let source = MockSource::builder()
//!     .balance(520.00)
//!     .trade("2024-01-01T14:30:00Z", true)
//!     .build();
//! ```

use std::cell::Cell;

use pnl_ledger::ClosedTrade;

use crate::error::SourceError;
use crate::AccountSource;

/// Builder for `MockSource`.
pub struct MockSourceBuilder {
    balance: Option<f64>,
    trades: Vec<ClosedTrade>,
    trades_fail: bool,
}

impl MockSourceBuilder {
    pub fn balance(mut self, balance: f64) -> Self {
        self.balance = Some(balance);
        self
    }

    /// Every balance request fails with a connection error.
    pub fn failing_balance(mut self) -> Self {
        self.balance = None;
        self
    }

    pub fn trade(mut self, exit_time: &str, won: bool) -> Self {
        self.trades.push(ClosedTrade {
            exit_time: Some(exit_time.to_string()),
            won,
        });
        self
    }

    pub fn trades(mut self, trades: Vec<ClosedTrade>) -> Self {
        self.trades = trades;
        self
    }

    /// Every trade listing fails with a connection error.
    pub fn failing_trades(mut self) -> Self {
        self.trades_fail = true;
        self
    }

    pub fn build(self) -> MockSource {
        MockSource {
            balance: self.balance,
            trades: self.trades,
            trades_fail: self.trades_fail,
            balance_calls: Cell::new(0),
            trades_calls: Cell::new(0),
        }
    }
}

/// An in-memory account that counts how often it is queried.
pub struct MockSource {
    balance: Option<f64>,
    trades: Vec<ClosedTrade>,
    trades_fail: bool,
    balance_calls: Cell<usize>,
    trades_calls: Cell<usize>,
}

impl MockSource {
    pub fn builder() -> MockSourceBuilder {
        MockSourceBuilder {
            balance: Some(500.0),
            trades: Vec::new(),
            trades_fail: false,
        }
    }

    pub fn balance_calls(&self) -> usize {
        self.balance_calls.get()
    }

    pub fn trades_calls(&self) -> usize {
        self.trades_calls.get()
    }
}

impl AccountSource for MockSource {
    fn balance(&self) -> Result<f64, SourceError> {
        self.balance_calls.set(self.balance_calls.get() + 1);
        self.balance
            .ok_or_else(|| SourceError::Connection("mock: balance unavailable".into()))
    }

    fn trades(&self) -> Result<Vec<ClosedTrade>, SourceError> {
        self.trades_calls.set(self.trades_calls.get() + 1);
        if self.trades_fail {
            return Err(SourceError::Connection("mock: trades unavailable".into()));
        }
        Ok(self.trades.clone())
    }
}
