//! Ledger data model: open day, closed daily record, and the whole document.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::stats::TradeStats;

/// Schema tag written to every ledger document.
pub const LEDGER_VERSION: &str = "1.0";

fn default_version() -> String {
    LEDGER_VERSION.into()
}

fn default_description() -> String {
    "Daily PnL records for Kalshi trading".into()
}

fn default_true() -> bool {
    true
}

/// Round a dollar amount to whole cents.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Profit and loss between two balances as `(usd, pct)`, both rounded to cents.
///
/// The percentage is taken from the unrounded dollar difference and is zero
/// when the starting balance is not positive.
pub fn pnl(start_balance: f64, end_balance: f64) -> (f64, f64) {
    let usd = end_balance - start_balance;
    let pct = if start_balance > 0.0 {
        usd / start_balance * 100.0
    } else {
        0.0
    };
    (round_cents(usd), round_cents(pct))
}

/// The trading day currently in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenDay {
    pub date: NaiveDate,
    pub start_balance: f64,
    /// Legacy marker, always true once a day is opened.
    #[serde(default = "default_true")]
    pub starting_set: bool,
}

impl OpenDay {
    pub fn new(date: NaiveDate, start_balance: f64) -> Self {
        Self {
            date,
            start_balance,
            starting_set: true,
        }
    }

    /// The day that follows this one, opened at `start_balance`.
    ///
    /// Always the next calendar date, regardless of when the close runs, so
    /// the ledger stays contiguous.
    pub fn successor(&self, start_balance: f64) -> OpenDay {
        let date = self.date.succ_opt().unwrap_or(self.date);
        OpenDay::new(date, start_balance)
    }
}

/// A closed trading day. Never modified after it is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub start_balance: f64,
    pub end_balance: f64,
    pub pnl_usd: f64,
    pub pnl_pct: f64,
    pub trades_count: u32,
    pub wins: u32,
    pub losses: u32,
    pub timestamp_start: String,
    pub timestamp_end: String,
    #[serde(default)]
    pub notes: String,
}

impl DailyRecord {
    /// Close `day` at `end_balance`.
    pub fn close(
        day: &OpenDay,
        end_balance: f64,
        stats: TradeStats,
        timestamp_start: String,
        timestamp_end: String,
    ) -> Self {
        let (pnl_usd, pnl_pct) = pnl(day.start_balance, end_balance);
        Self {
            date: day.date,
            start_balance: day.start_balance,
            end_balance,
            pnl_usd,
            pnl_pct,
            trades_count: stats.trades_count,
            wins: stats.wins,
            losses: stats.losses,
            timestamp_start,
            timestamp_end,
            notes: String::new(),
        }
    }

    pub fn is_profitable(&self) -> bool {
        self.pnl_usd >= 0.0
    }
}

/// The persisted ledger: every closed day plus the open one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerDocument {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default)]
    pub records: Vec<DailyRecord>,
    #[serde(default)]
    pub current_day: Option<OpenDay>,
}

impl Default for LedgerDocument {
    fn default() -> Self {
        Self {
            version: default_version(),
            description: default_description(),
            records: Vec::new(),
            current_day: None,
        }
    }
}

impl LedgerDocument {
    /// Append a closed day and open its successor in one step.
    pub fn roll_over(&mut self, record: DailyRecord, next: OpenDay) {
        self.records.push(record);
        self.current_day = Some(next);
    }

    /// Name of the first amount that cannot be written as a JSON number.
    ///
    /// JSON has no NaN or infinity; serializing one yields `null`, which no
    /// longer parses back as a balance.
    pub fn non_finite_field(&self) -> Option<String> {
        if let Some(day) = &self.current_day {
            if !day.start_balance.is_finite() {
                return Some(format!("current_day {} start_balance", day.date));
            }
        }
        self.records.iter().find_map(|r| {
            [
                ("start_balance", r.start_balance),
                ("end_balance", r.end_balance),
                ("pnl_usd", r.pnl_usd),
                ("pnl_pct", r.pnl_pct),
            ]
            .into_iter()
            .find(|(_, v)| !v.is_finite())
            .map(|(name, _)| format!("record {} {name}", r.date))
        })
    }

    /// The last `n` records, oldest first.
    pub fn recent(&self, n: usize) -> &[DailyRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }
}
