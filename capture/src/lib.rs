//! pnl-capture: daily PnL capture for a single trading account.
//!
//! Reads the account balance and closed trades from the account service,
//! closes the open trading day into a `DailyRecord`, opens the next one, and
//! keeps everything in one JSON ledger file.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod report;

use pnl_ledger::{PnlStore, SystemClock};
use pnl_ledger_source::http::HttpSource;

use crate::config::Config;
use crate::error::Result;
use crate::lifecycle::DayLedger;

/// Wire a ledger to the live account service and the wall clock.
pub fn connect(config: &Config) -> Result<DayLedger<HttpSource, SystemClock>> {
    let source = HttpSource::new(&config.api.base_url, config.timeout())?;
    Ok(DayLedger::new(
        PnlStore::new(&config.store.path),
        source,
        SystemClock::with_offset_hours(config.day.utc_offset_hours),
        config.day.fallback_start_balance,
    ))
}
