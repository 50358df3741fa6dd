//! Property-based tests for ledger invariants.
//!
//! These tests use proptest to verify that the PnL formulas, the trade tally
//! the day roll-over and the store round-trip hold across randomly generated
//! inputs.

use chrono::NaiveDate;
use pnl_ledger::{
    ClosedTrade, DailyRecord, LedgerDocument, OpenDay, PnlStore, StoreError, TradeStats, pnl,
    round_cents,
};
use proptest::prelude::*;

/// Generate a positive balance in dollars (cent precision)
fn balance_strategy() -> impl Strategy<Value = f64> {
    (1i64..=10_000_000i64).prop_map(|cents| cents as f64 / 100.0)
}

/// Generate a date within a few years
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..3650).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Duration::days(offset)
    })
}

/// Generate an amount that may be NaN or infinite
fn amount_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => -1e12f64..1e12f64,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
        1 => Just(1e308),
        1 => Just(-1e308),
    ]
}

/// Generate a trade exiting on one of a few nearby days
fn trade_strategy() -> impl Strategy<Value = ClosedTrade> {
    (prop::option::of(0u32..4), any::<bool>(), 0u32..24).prop_map(|(day, won, hour)| ClosedTrade {
        exit_time: day.map(|d| format!("2024-01-{:02}T{hour:02}:00:00Z", d + 1)),
        won,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    // ========================================================================
    // PNL FORMULAS
    // ========================================================================

    /// pnl_usd is the rounded balance difference
    #[test]
    fn pnl_usd_is_rounded_difference(start in balance_strategy(), end in balance_strategy()) {
        let (usd, _) = pnl(start, end);
        prop_assert_eq!(usd, round_cents(end - start));
    }

    /// pnl_pct is the rounded return on the starting balance
    #[test]
    fn pnl_pct_is_rounded_return(start in balance_strategy(), end in balance_strategy()) {
        let (_, pct) = pnl(start, end);
        prop_assert_eq!(pct, round_cents((end - start) / start * 100.0));
    }

    /// A zero starting balance never divides
    #[test]
    fn zero_start_zero_pct(end in balance_strategy()) {
        let (usd, pct) = pnl(0.0, end);
        prop_assert_eq!(pct, 0.0);
        prop_assert!(usd.is_finite());
    }

    /// Rounded values carry at most two decimals
    #[test]
    fn pnl_has_cent_precision(start in balance_strategy(), end in balance_strategy()) {
        let (usd, pct) = pnl(start, end);
        prop_assert!((usd * 100.0 - (usd * 100.0).round()).abs() < 1e-6);
        prop_assert!((pct * 100.0 - (pct * 100.0).round()).abs() < 1e-6);
    }

    // ========================================================================
    // TRADE TALLY
    // ========================================================================

    /// wins + losses == trades_count for any trade list
    #[test]
    fn wins_plus_losses_is_count(
        trades in prop::collection::vec(trade_strategy(), 0..100),
        day in 1u32..=4,
    ) {
        let stats = TradeStats::for_day(&trades, NaiveDate::from_ymd_opt(2024, 1, day).unwrap());
        prop_assert_eq!(stats.wins + stats.losses, stats.trades_count);
        prop_assert!(stats.trades_count as usize <= trades.len());
    }

    /// Every trade lands on at most one day
    #[test]
    fn tallies_partition_trades(trades in prop::collection::vec(trade_strategy(), 0..100)) {
        let total: u32 = (1u32..=4)
            .map(|d| TradeStats::for_day(&trades, NaiveDate::from_ymd_opt(2024, 1, d).unwrap()).trades_count)
            .sum();
        let dated = trades.iter().filter(|t| t.exit_time.is_some()).count();
        prop_assert_eq!(total as usize, dated);
    }

    /// from_counts always balances
    #[test]
    fn from_counts_balances(count in 0u32..10_000, wins in 0u32..20_000) {
        let stats = TradeStats::from_counts(count, wins);
        prop_assert_eq!(stats.wins + stats.losses, stats.trades_count);
    }

    // ========================================================================
    // ROLL-OVER
    // ========================================================================

    /// Closing appends exactly one record and opens the next calendar day
    #[test]
    fn roll_over_is_contiguous(
        date in date_strategy(),
        start in balance_strategy(),
        end in balance_strategy(),
        existing in 0usize..10,
    ) {
        let day = OpenDay::new(date, start);
        let mut doc = LedgerDocument::default();
        for _ in 0..existing {
            doc.records.push(DailyRecord::close(&day, start, TradeStats::default(), String::new(), String::new()));
        }
        doc.current_day = Some(day.clone());

        let record = DailyRecord::close(&day, end, TradeStats::default(), String::new(), String::new());
        doc.roll_over(record.clone(), day.successor(end));

        prop_assert_eq!(doc.records.len(), existing + 1);
        prop_assert_eq!(doc.records.last(), Some(&record));
        let next = doc.current_day.unwrap();
        prop_assert_eq!(next.date, date.succ_opt().unwrap());
        prop_assert_eq!(next.start_balance, end);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // ========================================================================
    // STORE ROUND-TRIP
    // ========================================================================

    /// Whatever amounts a close produces, the file on disk stays loadable
    /// and earlier records are never lost
    #[test]
    fn store_never_loses_records(start in amount_strategy(), end in amount_strategy()) {
        let dir = tempfile::tempdir().unwrap();
        let store = PnlStore::new(dir.path().join("daily_pnl.json"));

        let first = OpenDay::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 500.0);
        let mut doc = LedgerDocument::default();
        doc.roll_over(
            DailyRecord::close(&first, 510.0, TradeStats::default(), String::new(), String::new()),
            first.successor(510.0),
        );
        store.save(&doc).unwrap();

        let day = OpenDay::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), start);
        let record = DailyRecord::close(&day, end, TradeStats::default(), String::new(), String::new());
        let writable = [record.start_balance, record.end_balance, record.pnl_usd, record.pnl_pct]
            .iter()
            .all(|v| v.is_finite());
        doc.roll_over(record, day.successor(end));

        match store.save(&doc) {
            Ok(()) => prop_assert!(writable),
            Err(StoreError::NonFinite { .. }) => prop_assert!(!writable),
            Err(e) => prop_assert!(false, "unexpected save error: {}", e),
        }

        let loaded = store.try_load();
        prop_assert!(loaded.is_ok());
        let loaded = loaded.unwrap();
        prop_assert_eq!(loaded.records.len(), if writable { 2 } else { 1 });
        prop_assert_eq!(loaded.records[0].end_balance, 510.0);
    }
}
