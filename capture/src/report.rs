//! Human-readable ledger status.

use std::fmt;

use chrono::NaiveDate;
use pnl_ledger::DailyRecord;

/// How many closed days the status report lists.
pub const RECENT_DAYS: usize = 5;

/// Unrealized PnL of the open day against a live balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LivePnl {
    pub balance: f64,
    pub pnl_usd: f64,
    pub pnl_pct: f64,
}

/// The open day as shown in the status report.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenDaySummary {
    pub date: NaiveDate,
    pub start_balance: f64,
    /// Absent when the live balance could not be fetched.
    pub live: Option<LivePnl>,
}

/// Read-only projection of the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    pub total_days: usize,
    pub open_day: Option<OpenDaySummary>,
    /// Most recent closed days, oldest first.
    pub recent: Vec<DailyRecord>,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Daily PnL Status ===")?;
        writeln!(f, "Total recorded days: {}", self.total_days)?;

        if let Some(day) = &self.open_day {
            writeln!(f)?;
            writeln!(f, "Current day: {}", day.date)?;
            writeln!(f, "Starting balance: ${:.2}", day.start_balance)?;
            if let Some(live) = &day.live {
                writeln!(f, "Current balance: ${:.2}", live.balance)?;
                writeln!(
                    f,
                    "Current P&L: ${:+.2} ({:+.2}%)",
                    live.pnl_usd, live.pnl_pct
                )?;
            }
        }

        if !self.recent.is_empty() {
            writeln!(f)?;
            writeln!(f, "=== Last {RECENT_DAYS} Days ===")?;
            for record in &self.recent {
                let marker = if record.is_profitable() { '+' } else { '-' };
                writeln!(
                    f,
                    "[{marker}] {}: ${:+.2} ({:+.2}%) - {} trades",
                    record.date, record.pnl_usd, record.pnl_pct, record.trades_count
                )?;
            }
        }

        Ok(())
    }
}
