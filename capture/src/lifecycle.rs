//! Day lifecycle: open a trading day, close it into a record, report on it.
//!
//! The ledger has two states, with or without an open day. `close_day` never
//! leaves it without one: the closed day is archived and its successor opened
//! in the same save.

use chrono::SecondsFormat;
use log::{error, info, warn};
use pnl_ledger::{
    DailyRecord, LedgerDocument, OpenDay, PnlStore, StoreError, TradingClock, pnl,
};
use pnl_ledger_source::{AccountSource, fetch_balance, fetch_today_trade_stats};

use crate::report::{LivePnl, OpenDaySummary, RECENT_DAYS, StatusReport};

/// Why a lifecycle operation did not change the ledger.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("no current day to close")]
    NoOpenDay,

    #[error("failed to get ending balance; day left open")]
    BalanceUnavailable,

    #[error("starting balance {0} is not a finite number")]
    InvalidBalance(f64),

    #[error("failed to save ledger: {0}")]
    Save(#[from] StoreError),
}

/// Result of a successful close.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedDay {
    pub record: DailyRecord,
    pub next: OpenDay,
}

/// The day lifecycle manager, wired to a store, an account and a clock.
pub struct DayLedger<S, C> {
    store: PnlStore,
    source: S,
    clock: C,
    fallback_start_balance: f64,
}

impl<S: AccountSource, C: TradingClock> DayLedger<S, C> {
    pub fn new(store: PnlStore, source: S, clock: C, fallback_start_balance: f64) -> Self {
        Self {
            store,
            source,
            clock,
            fallback_start_balance,
        }
    }

    pub fn store(&self) -> &PnlStore {
        &self.store
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Open a new day dated today, replacing any day already open.
    ///
    /// The starting balance is `explicit_balance` if given, else the live
    /// balance, else the configured fallback. A NaN or infinite explicit
    /// balance is rejected before the ledger is read.
    pub fn start_new_day(&self, explicit_balance: Option<f64>) -> Result<OpenDay, LedgerError> {
        if let Some(balance) = explicit_balance.filter(|b| !b.is_finite()) {
            return Err(LedgerError::InvalidBalance(balance));
        }

        let mut doc = self.store.load();

        let start_balance = match explicit_balance {
            Some(balance) => balance,
            None => fetch_balance(&self.source).unwrap_or_else(|| {
                warn!(
                    "balance unavailable, starting at fallback ${:.2}",
                    self.fallback_start_balance
                );
                self.fallback_start_balance
            }),
        };

        if let Some(existing) = &doc.current_day {
            warn!(
                "replacing open day {} (start ${:.2})",
                existing.date, existing.start_balance
            );
        }

        let day = OpenDay::new(self.clock.today(), start_balance);
        doc.current_day = Some(day.clone());
        self.store.save(&doc)?;

        info!("opened day {} at ${:.2}", day.date, day.start_balance);
        Ok(day)
    }

    /// Archive the open day at the live balance and open the next calendar day.
    ///
    /// Nothing is written unless the ending balance was fetched.
    pub fn close_day(&self) -> Result<ClosedDay, LedgerError> {
        let mut doc = self.store.load();

        let current = doc.current_day.clone().ok_or(LedgerError::NoOpenDay)?;
        let end_balance =
            fetch_balance(&self.source).ok_or(LedgerError::BalanceUnavailable)?;
        let stats = fetch_today_trade_stats(&self.source, self.clock.today());

        let record = DailyRecord::close(
            &current,
            end_balance,
            stats,
            self.timestamp_start(&current),
            self.clock
                .local_now()
                .to_rfc3339_opts(SecondsFormat::Secs, false),
        );
        let next = current.successor(end_balance);

        doc.roll_over(record.clone(), next.clone());
        self.store.save(&doc)?;

        info!(
            "closed day {}: pnl {:+.2} ({:+.2}%), next day {}",
            record.date, record.pnl_usd, record.pnl_pct, next.date
        );
        Ok(ClosedDay { record, next })
    }

    /// Read-only snapshot of the ledger with live PnL for the open day.
    ///
    /// An unreadable ledger is reported as empty and left exactly as found.
    pub fn status(&self) -> StatusReport {
        let doc = self.store.try_load().unwrap_or_else(|e| {
            error!("{e}; reporting an empty ledger");
            LedgerDocument::default()
        });
        self.report(&doc)
    }

    fn report(&self, doc: &LedgerDocument) -> StatusReport {
        let open_day = doc.current_day.as_ref().map(|day| {
            let live = fetch_balance(&self.source).map(|balance| {
                let (pnl_usd, pnl_pct) = pnl(day.start_balance, balance);
                LivePnl {
                    balance,
                    pnl_usd,
                    pnl_pct,
                }
            });
            OpenDaySummary {
                date: day.date,
                start_balance: day.start_balance,
                live,
            }
        });

        StatusReport {
            total_days: doc.records.len(),
            open_day,
            recent: doc.recent(RECENT_DAYS).to_vec(),
        }
    }

    /// Local midnight of the day, in UTC.
    fn timestamp_start(&self, day: &OpenDay) -> String {
        self.clock
            .day_start_utc(day.date)
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string()
    }
}
