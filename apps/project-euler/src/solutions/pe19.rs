use chrono::{Datelike, NaiveDate, Weekday};
use math::Result;

/// PE19: Counting Sundays
/// Number of months in `first_year..=last_year` whose day `calendar_day`
/// falls on `weekday`. Months without that day (e.g. 30 February) are skipped.
pub fn count_weekday_date_range(
    first_year: i32,
    last_year: i32,
    weekday: Weekday,
    calendar_day: u32,
) -> usize {
    (first_year..=last_year)
        .flat_map(|year| (1..=12).map(move |month| (year, month)))
        .filter_map(|(year, month)| NaiveDate::from_ymd_opt(year, month, calendar_day))
        .filter(|date| date.weekday() == weekday)
        .count()
}

pub fn solve() -> Result<String> {
    Ok(count_weekday_date_range(1901, 2000, Weekday::Sun, 1).to_string())
}
