//! Calendar-period grouping of operations into ordinal buckets.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use tracing::warn;

use finchart_domain::{Granularity, Operation};

/// Mapping from bucket ordinal to the operations dated within that bucket.
/// Every ordinal in `[0, period_count)` is present, empty buckets included,
/// so summarized series stay continuous.
pub type GroupedOperations = BTreeMap<usize, Vec<Operation>>;

/// Groups operations by their calendar period relative to a range start.
pub struct OperationGrouper;

impl OperationGrouper {
    /// Number of buckets spanned by the inclusive range `[start, end]`.
    ///
    /// A violated `start <= end` precondition is not rejected here; the
    /// count clamps to 1 so downstream output stays well-formed.
    pub fn period_count(start: NaiveDate, end: NaiveDate, granularity: Granularity) -> usize {
        (units_between(start, end, granularity) + 1).max(1) as usize
    }

    /// Buckets each operation at the number of complete calendar units
    /// between `start` and its date. Operations dated outside the range are
    /// expected to have been excluded upstream; any that slip through are
    /// clamped into the nearest bucket to keep the output well-formed.
    pub fn group(
        operations: &[Operation],
        start: NaiveDate,
        end: NaiveDate,
        granularity: Granularity,
    ) -> GroupedOperations {
        let count = Self::period_count(start, end, granularity);
        let mut grouped: GroupedOperations = (0..count).map(|index| (index, Vec::new())).collect();
        for operation in operations {
            let units = units_between(start, operation.date, granularity);
            if units < 0 || units >= count as i64 {
                warn!(
                    "operation {} dated {} falls outside the filter range; clamping",
                    operation.id, operation.date
                );
            }
            let bucket = units.clamp(0, count as i64 - 1) as usize;
            if let Some(entries) = grouped.get_mut(&bucket) {
                entries.push(operation.clone());
            }
        }
        grouped
    }
}

/// Complete calendar units elapsed from `start` to `end`, anchored at
/// `start` (a month elapses when the same day-of-month recurs, not at a
/// calendar boundary). Negative when `end` precedes `start`.
pub fn units_between(start: NaiveDate, end: NaiveDate, granularity: Granularity) -> i64 {
    match granularity {
        Granularity::Day => (end - start).num_days(),
        Granularity::Week => (end - start).num_days() / 7,
        Granularity::Month => months_between(start, end),
        Granularity::Quarter => months_between(start, end) / 3,
        Granularity::Year => months_between(start, end) / 12,
    }
}

fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let mut months = (end.year() as i64 - start.year() as i64) * 12
        + (end.month() as i64 - start.month() as i64);
    // Count complete months only; a month-end start whose day clamps still
    // completes its month.
    if months > 0 && shift_month(start, months as i32) > end {
        months -= 1;
    } else if months < 0 && shift_month(start, months as i32) < end {
        months += 1;
    }
    months
}

pub(crate) fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    let mut day = date.day();
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    day = day.min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(date)
}

pub(crate) fn shift_year(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    let day = date.day().min(days_in_month(year, date.month()));
    NaiveDate::from_ymd_opt(year, date.month(), day).unwrap_or(date)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .map(|first_next| (first_next - Duration::days(1)).day())
        .unwrap_or(28)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn months_between_counts_complete_months() {
        assert_eq!(months_between(date(2024, 1, 1), date(2024, 3, 31)), 2);
        assert_eq!(months_between(date(2024, 1, 15), date(2024, 2, 10)), 0);
        assert_eq!(months_between(date(2024, 1, 15), date(2024, 2, 15)), 1);
    }

    #[test]
    fn month_end_clamping_counts_as_complete() {
        // Jan 31 + 1 month clamps to Feb 29; the month still elapsed.
        assert_eq!(months_between(date(2024, 1, 31), date(2024, 2, 29)), 1);
        assert_eq!(months_between(date(2023, 1, 31), date(2023, 2, 28)), 1);
    }

    #[test]
    fn shift_month_clamps_day() {
        assert_eq!(shift_month(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(shift_month(date(2023, 1, 31), 1), date(2023, 2, 28));
        assert_eq!(shift_month(date(2024, 3, 31), -1), date(2024, 2, 29));
    }

    #[test]
    fn shift_year_handles_leap_february() {
        assert_eq!(shift_year(date(2024, 2, 29), 1), date(2025, 2, 28));
    }
}
