//! Trading-day clock.
//!
//! The trading calendar is the UTC calendar shifted by a fixed offset, with
//! no timezone database behind it: a day starts at local midnight of the
//! configured offset all year round.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Offset, Utc};

/// Default offset of the trading calendar (US Eastern standard time).
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = -5;

/// Source of "now" and "today" for the ledger.
pub trait TradingClock {
    /// Current instant.
    fn now_utc(&self) -> DateTime<Utc>;

    /// Fixed offset of the trading calendar from UTC.
    fn offset(&self) -> FixedOffset;

    /// Current instant in the trading calendar's offset.
    fn local_now(&self) -> DateTime<FixedOffset> {
        self.now_utc().with_timezone(&self.offset())
    }

    /// Today's civil date in the trading calendar.
    fn today(&self) -> NaiveDate {
        self.local_now().date_naive()
    }

    /// Local midnight of `date`, expressed in UTC.
    fn day_start_utc(&self, date: NaiveDate) -> DateTime<Utc> {
        let local = date.and_time(NaiveTime::MIN);
        (local - chrono::Duration::seconds(i64::from(self.offset().local_minus_utc())))
            .and_utc()
    }
}

/// Build a fixed offset from whole hours, falling back to UTC when out of range.
pub fn offset_from_hours(hours: i32) -> FixedOffset {
    FixedOffset::east_opt(hours * 3600).unwrap_or_else(|| Utc.fix())
}

/// Wall clock with a fixed trading-calendar offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn with_offset_hours(hours: i32) -> Self {
        Self::new(offset_from_hours(hours))
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::with_offset_hours(DEFAULT_UTC_OFFSET_HOURS)
    }
}

impl TradingClock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn offset(&self) -> FixedOffset {
        self.offset
    }
}

/// Clock frozen at a given instant. Used by tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self { instant, offset }
    }

    /// Frozen clock using the default UTC-5 calendar.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self::new(instant, offset_from_hours(DEFAULT_UTC_OFFSET_HOURS))
    }
}

impl TradingClock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.instant
    }

    fn offset(&self) -> FixedOffset {
        self.offset
    }
}
