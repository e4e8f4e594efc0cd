//! Calendar conversions for commit records.
//!
//! Records carry a human-numbered month (1-12). `chrono` numbers months the
//! same way, so the month is passed through unchanged here and nowhere else
//! is a record turned into a date.

use chrono::{DateTime, Local, LocalResult, Months, NaiveDate, NaiveTime, TimeZone, Utc};
use log::warn;

use crate::types::CommitRecord;

/// Calendar day for a (year, month, day-of-month) triple, month 1-based.
pub fn calendar_date(year: i32, month: u32, date: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, date)
}

/// Local-time midnight of `day` in epoch milliseconds.
///
/// Where a DST transition skips midnight the UTC midnight is used instead.
pub fn local_midnight_millis(day: NaiveDate) -> i64 {
    let midnight = day.and_time(NaiveTime::MIN);
    match Local.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => dt.timestamp_millis(),
        LocalResult::Ambiguous(earliest, _) => earliest.timestamp_millis(),
        LocalResult::None => Utc.from_utc_datetime(&midnight).timestamp_millis(),
    }
}

/// Epoch milliseconds of local midnight on the given day, for building date ranges.
pub fn epoch_millis(year: i32, month: u32, date: u32) -> Option<i64> {
    calendar_date(year, month, date).map(local_midnight_millis)
}

/// Calendar day of a record.
pub fn record_date(record: &CommitRecord) -> Option<NaiveDate> {
    let day = calendar_date(record.year, record.month, record.date);
    if day.is_none() {
        warn!(
            "Skipping commit {} with invalid date {}-{}-{}",
            record.hash, record.year, record.month, record.date
        );
    }
    day
}

/// Instant (local midnight, epoch milliseconds) a record is filtered and sorted by.
pub fn record_instant(record: &CommitRecord) -> Option<i64> {
    record_date(record).map(local_midnight_millis)
}

/// Instant `months` calendar months before `now`, in epoch milliseconds.
///
/// Reaching past the earliest date `chrono` can represent yields `i64::MIN`.
pub fn months_before(now: DateTime<Local>, months: u32) -> i64 {
    now.checked_sub_months(Months::new(months))
        .map_or(i64::MIN, |start| start.timestamp_millis())
}

/// Local midnight of the day `now` falls on.
pub fn start_of_day(now: DateTime<Local>) -> DateTime<Local> {
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    Local.from_local_datetime(&midnight).earliest().unwrap_or(now)
}
