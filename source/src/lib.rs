//! Account balance and trade sources for pnl-ledger.
//!
//! Provides the `AccountSource` trait that the day lifecycle reads from.
//! Implementations:
//!
//! - **HTTP** (feature `http`): blocking client for the account service REST API
//! - **Mock**: configurable in-memory source for tests
//!
//! Both fetch helpers below swallow failures: a missing balance becomes
//! `None` and a failed trade listing becomes an all-zero tally.

pub mod error;
pub mod mock;
pub mod types;

#[cfg(feature = "http")]
pub mod http;

pub use error::SourceError;

use chrono::NaiveDate;
use log::warn;
use pnl_ledger::{ClosedTrade, TradeStats};

/// A remote account that reports its balance and closed trades.
pub trait AccountSource {
    /// Current account balance in dollars.
    fn balance(&self) -> Result<f64, SourceError>;

    /// Every closed trade the service knows about.
    fn trades(&self) -> Result<Vec<ClosedTrade>, SourceError>;
}

impl<S: AccountSource + ?Sized> AccountSource for Box<S> {
    fn balance(&self) -> Result<f64, SourceError> {
        (**self).balance()
    }

    fn trades(&self) -> Result<Vec<ClosedTrade>, SourceError> {
        (**self).trades()
    }
}

/// Current balance, or `None` if it could not be fetched.
///
/// A NaN or infinite balance counts as a failed fetch.
pub fn fetch_balance<S: AccountSource + ?Sized>(source: &S) -> Option<f64> {
    match source.balance() {
        Ok(balance) if balance.is_finite() => Some(balance),
        Ok(balance) => {
            warn!("ignoring non-finite balance {balance}");
            None
        }
        Err(e) => {
            warn!("error fetching balance: {e}");
            None
        }
    }
}

/// Trade tally for `today`, or all zeros if the trade list could not be fetched.
pub fn fetch_today_trade_stats<S: AccountSource + ?Sized>(
    source: &S,
    today: NaiveDate,
) -> TradeStats {
    match source.trades() {
        Ok(trades) => TradeStats::for_day(&trades, today),
        Err(e) => {
            warn!("error fetching trades: {e}");
            TradeStats::default()
        }
    }
}
