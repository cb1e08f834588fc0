//! Period Entity
//!
//! The span of days the homework has to be finished in.

use chrono::{DateTime, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;
const HALF_DAY_MS: i64 = DAY_MS / 2;

/// Inclusive range of calendar days.
///
/// `end_date >= start_date` is expected but not enforced; an inverted period
/// survives a share round-trip unchanged and simply has no days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Period {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self { start_date, end_date }
    }

    /// Period of `days` days beginning on `start_date` (end is `start + days - 1`).
    pub fn starting_on(start_date: NaiveDate, days: u32) -> Self {
        let span = i64::from(days.max(1)) - 1;
        let end_date = start_date
            .checked_add_signed(chrono::Duration::days(span))
            .unwrap_or(NaiveDate::MAX);
        Self::new(start_date, end_date)
    }

    /// Number of days including both ends, 0 when the period is inverted.
    pub fn day_count(&self) -> usize {
        let span = (self.end_date - self.start_date).num_days();
        if span < 0 {
            0
        } else {
            span as usize + 1
        }
    }

    /// Every calendar day from start to end inclusive.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start_date.iter_days().take(self.day_count())
    }

    /// Epoch milliseconds of the start date at UTC midnight.
    pub fn start_instant(&self) -> i64 {
        date_to_millis(self.start_date)
    }

    /// Epoch milliseconds of the end date at UTC midnight.
    pub fn end_instant(&self) -> i64 {
        date_to_millis(self.end_date)
    }

    /// Rebuild a period from two epoch-millisecond instants.
    ///
    /// Returns `None` when either instant is outside the representable date
    /// range.
    pub fn from_instants(start_ms: i64, end_ms: i64) -> Option<Self> {
        Some(Self::new(millis_to_date(start_ms)?, millis_to_date(end_ms)?))
    }
}

pub(crate) fn date_to_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Map an instant to the calendar day whose UTC midnight is nearest.
///
/// Local-midnight instants from zones within twelve hours of UTC land on the
/// date the user picked. Instants with a time of day may not: east of UTC
/// an evening instant lands on the following day.
pub(crate) fn millis_to_date(ms: i64) -> Option<NaiveDate> {
    let day = ms.saturating_add(HALF_DAY_MS).div_euclid(DAY_MS);
    let secs = day.checked_mul(DAY_MS / 1000)?;
    DateTime::from_timestamp(secs, 0).map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_count_is_inclusive() {
        let period = Period::new(date(2025, 7, 20), date(2025, 8, 31));
        assert_eq!(period.day_count(), 43);
        assert_eq!(period.days().count(), 43);
        assert_eq!(period.days().last(), Some(date(2025, 8, 31)));
    }

    #[test]
    fn test_single_and_inverted_periods() {
        let single = Period::new(date(2025, 7, 20), date(2025, 7, 20));
        assert_eq!(single.day_count(), 1);

        let inverted = Period::new(date(2025, 8, 31), date(2025, 7, 20));
        assert_eq!(inverted.day_count(), 0);
        assert_eq!(inverted.days().count(), 0);
    }

    #[test]
    fn test_starting_on() {
        let period = Period::starting_on(date(2025, 7, 1), 32);
        assert_eq!(period.end_date, date(2025, 8, 1));
        assert_eq!(period.day_count(), 32);
    }

    #[test]
    fn test_instants_round_trip() {
        let period = Period::new(date(2025, 7, 20), date(2025, 8, 31));
        assert_eq!(period.start_instant(), 1_752_969_600_000);
        let back = Period::from_instants(period.start_instant(), period.end_instant()).unwrap();
        assert_eq!(back, period);
    }

    #[test]
    fn test_local_midnight_instants_map_to_picked_date() {
        // 2025-07-20 00:00 at UTC+9 is 2025-07-19 15:00 UTC
        let tokyo = 1_752_969_600_000 - 9 * 3_600_000;
        assert_eq!(millis_to_date(tokyo), Some(date(2025, 7, 20)));
        // 2025-07-20 00:00 at UTC-7 is 2025-07-20 07:00 UTC
        let pacific = 1_752_969_600_000 + 7 * 3_600_000;
        assert_eq!(millis_to_date(pacific), Some(date(2025, 7, 20)));
    }

    #[test]
    fn test_time_of_day_instants_round_to_nearest_midnight() {
        // 2025-07-20 23:00 at UTC+9 is 2025-07-20 14:00 UTC
        let tokyo_evening = 1_752_969_600_000 + 14 * 3_600_000;
        assert_eq!(millis_to_date(tokyo_evening), Some(date(2025, 7, 21)));
        // 2025-07-20 09:00 at UTC+9 is 2025-07-20 00:00 UTC
        let tokyo_morning = 1_752_969_600_000;
        assert_eq!(millis_to_date(tokyo_morning), Some(date(2025, 7, 20)));
    }

    #[test]
    fn test_epoch_is_a_valid_instant() {
        assert_eq!(millis_to_date(0), Some(date(1970, 1, 1)));
    }

    #[test]
    fn test_out_of_range_instant() {
        assert_eq!(millis_to_date(i64::MAX), None);
        assert!(Period::from_instants(0, i64::MIN).is_none());
    }
}
