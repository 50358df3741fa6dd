//! # pnl-ledger
//!
//! Core types for a daily profit-and-loss ledger.
//!
//! A ledger is a single JSON document holding every closed trading day plus
//! the day currently in progress. Closing a day turns the open day into an
//! immutable [`DailyRecord`] and opens the next calendar day with the closing
//! balance as its starting balance.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use pnl_ledger::{DailyRecord, OpenDay, TradeStats};
//!
//! let day = OpenDay::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 500.0);
//! let stats = TradeStats::from_counts(3, 2);
//! let record = DailyRecord::close(&day, 520.0, stats, "2024-01-01T05:00:00Z".into(), String::new());
//!
//! assert_eq!(record.pnl_usd, 20.0);
//! assert_eq!(record.pnl_pct, 4.0);
//! assert_eq!(day.successor(520.0).date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
//! ```
//!
//! ## Trading-day calendar
//!
//! "Today" is resolved by a [`TradingClock`]: the current instant shifted by
//! a fixed UTC offset (UTC-5 by default), with no daylight-saving rules.

pub mod clock;
pub mod error;
pub mod record;
pub mod stats;
pub mod store;

pub use clock::{DEFAULT_UTC_OFFSET_HOURS, FixedClock, SystemClock, TradingClock};
pub use error::StoreError;
pub use record::{DailyRecord, LedgerDocument, OpenDay, pnl, round_cents};
pub use stats::{ClosedTrade, TradeStats};
pub use store::PnlStore;
