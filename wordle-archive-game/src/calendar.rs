//! Mapping between calendar time and archive day numbers.
use chrono::{Local, NaiveDate, NaiveDateTime};

/// Puzzle index, starting at 1.
pub type Day = u32;

pub const FIRST_DAY: Day = 1;

const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Local midnight of 2022-02-24, the archive's day 1.
#[must_use]
pub fn epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2022, 2, 24)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Whole days between the epoch and `now`, rounded up.
#[must_use]
pub fn elapsed_days(now: NaiveDateTime) -> Day {
    let millis = (now - epoch()).num_milliseconds().unsigned_abs();
    Day::try_from(millis.div_ceil(MILLIS_PER_DAY)).unwrap_or(Day::MAX)
}

/// Today's playable day, kept within `FIRST_DAY..=last_day`.
#[must_use]
pub fn today_at(now: NaiveDateTime, last_day: Day) -> Day {
    clamp_day(elapsed_days(now), last_day)
}

/// Today's playable day by the local clock.
#[must_use]
pub fn today(last_day: Day) -> Day {
    today_at(Local::now().naive_local(), last_day)
}

/// Clamp any day request into the archive.
#[must_use]
pub fn clamp_day(day: Day, last_day: Day) -> Day {
    day.clamp(FIRST_DAY, last_day.max(FIRST_DAY))
}
