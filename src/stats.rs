//! Per-day trade tally.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A closed trade as reported by the account service.
///
/// Only the exit time and the outcome matter here; any other fields in the
/// payload are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClosedTrade {
    #[serde(default)]
    pub exit_time: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub won: bool,
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl ClosedTrade {
    /// The date portion of the exit timestamp (text before `T`).
    pub fn exit_date(&self) -> Option<&str> {
        let exit = self.exit_time.as_deref()?;
        if exit.is_empty() {
            return None;
        }
        exit.split('T').next()
    }
}

/// Trade counts for one trading day. `wins + losses == trades_count`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeStats {
    pub trades_count: u32,
    pub wins: u32,
    pub losses: u32,
}

impl TradeStats {
    /// Build from a total and a win count; losses are the remainder.
    pub fn from_counts(trades_count: u32, wins: u32) -> Self {
        let wins = wins.min(trades_count);
        Self {
            trades_count,
            wins,
            losses: trades_count - wins,
        }
    }

    /// Tally the trades that exited on `day`.
    pub fn for_day(trades: &[ClosedTrade], day: NaiveDate) -> Self {
        let day = day.format("%Y-%m-%d").to_string();
        let (count, wins) = trades
            .iter()
            .filter(|t| t.exit_date() == Some(day.as_str()))
            .fold((0u32, 0u32), |(count, wins), t| {
                (count + 1, wins + u32::from(t.won))
            });
        Self::from_counts(count, wins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trade(exit: Option<&str>, won: bool) -> ClosedTrade {
        ClosedTrade {
            exit_time: exit.map(str::to_string),
            won,
        }
    }

    fn jan(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn counts_only_matching_day() {
        let trades = vec![
            trade(Some("2024-01-01T14:30:00Z"), true),
            trade(Some("2024-01-01T15:00:00"), true),
            trade(Some("2024-01-01T16:45:12.5"), false),
            trade(Some("2023-12-31T23:59:59Z"), true),
            trade(Some("2024-01-02T00:00:01Z"), false),
        ];
        let stats = TradeStats::for_day(&trades, jan(1));
        assert_eq!(stats, TradeStats::from_counts(3, 2));
        assert_eq!(stats.losses, 1);
    }

    #[test]
    fn missing_or_empty_exit_time_is_skipped() {
        let trades = vec![trade(None, true), trade(Some(""), true)];
        assert_eq!(TradeStats::for_day(&trades, jan(1)), TradeStats::default());
    }

    #[test]
    fn date_only_exit_time_matches() {
        let trades = vec![trade(Some("2024-01-01"), false)];
        assert_eq!(TradeStats::for_day(&trades, jan(1)).trades_count, 1);
    }

    #[test]
    fn from_counts_clamps_wins() {
        let stats = TradeStats::from_counts(2, 5);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 0);
    }

    #[test]
    fn parse_trade_ignores_extra_fields() {
        let json = r#"{"ticker":"KX-1","exit_time":"2024-01-01T10:00:00Z","won":true,"pnl":1.5}"#;
        let t: ClosedTrade = serde_json::from_str(json).unwrap();
        assert!(t.won);
        assert_eq!(t.exit_date(), Some("2024-01-01"));
    }

    #[test]
    fn parse_trade_null_won_is_loss() {
        let t: ClosedTrade =
            serde_json::from_str(r#"{"exit_time":"2024-01-01T10:00:00Z","won":null}"#).unwrap();
        assert!(!t.won);
    }

    #[test]
    fn parse_trade_defaults() {
        let t: ClosedTrade = serde_json::from_str("{}").unwrap();
        assert_eq!(t, ClosedTrade::default());
    }
}
