//! Timeframe -> request boundaries.
//!
//! Pure: the caller supplies "now" and the local UTC offset. Every upper bound is
//! the local midnight that starts `today + N` days; only `Tomorrow` moves the lower
//! bound off "now".

use crate::domain::{TimeWindow, Timeframe};
use chrono::{DateTime, Days, FixedOffset, NaiveDate, SecondsFormat, TimeZone, Utc};

/// Resolve `timeframe` against `now`, expressing all bounds in `offset`.
pub fn resolve(timeframe: Timeframe, now: DateTime<Utc>, offset: FixedOffset) -> TimeWindow {
    let local_now = now.with_timezone(&offset);
    let today = local_now.date_naive();
    let midnight_in = |days: u64| local_midnight(today + Days::new(days), offset);

    match timeframe {
        Timeframe::Anytime => TimeWindow {
            from: local_now,
            to: None,
        },
        Timeframe::Today => TimeWindow {
            from: local_now,
            to: Some(midnight_in(1)),
        },
        Timeframe::Tomorrow => TimeWindow {
            from: midnight_in(1),
            to: Some(midnight_in(2)),
        },
        Timeframe::ThisWeek => TimeWindow {
            from: local_now,
            to: Some(midnight_in(7)),
        },
    }
}

/// Resolve against the system clock and its current offset.
pub fn resolve_now(timeframe: Timeframe) -> TimeWindow {
    let now = chrono::Local::now();
    resolve(timeframe, now.with_timezone(&Utc), *now.offset())
}

/// `00:00:00` of `date` in `offset`.
fn local_midnight(date: NaiveDate, offset: FixedOffset) -> DateTime<FixedOffset> {
    let naive = date.and_time(chrono::NaiveTime::MIN);
    let utc = naive - chrono::TimeDelta::seconds(i64::from(offset.local_minus_utc()));
    offset.from_utc_datetime(&utc)
}

/// Wire format: whole seconds with a signed `±HH:MM` suffix, never normalized to `Z`.
pub fn format_timestamp(ts: &DateTime<FixedOffset>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, false)
}
