//! Week boundaries of a timetable year.

use chrono::{Datelike, NaiveDate, Weekday};

/// `strftime` pattern of the `start_date` query parameter (`DD-Mon-YYYY`).
pub const WEEK_START_FORMAT: &str = "%d-%b-%Y";

/// Every Monday from December 26 of the prior year through December 31 of
/// `year`, in ascending order.
///
/// When January 1 is not a Monday the list opens with the last Monday of the
/// prior year, so the week containing January 1 is still fetched.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use uoacal_common::time::weeks::mondays_in_year;
///
/// let mondays = mondays_in_year(2024);
/// assert_eq!(mondays.first(), NaiveDate::from_ymd_opt(2024, 1, 1).as_ref());
/// assert_eq!(mondays.last(), NaiveDate::from_ymd_opt(2024, 12, 30).as_ref());
/// ```
#[must_use]
pub fn mondays_in_year(year: i32) -> Vec<NaiveDate> {
    let (Some(start), Some(end)) =
        (NaiveDate::from_ymd_opt(year - 1, 12, 26), NaiveDate::from_ymd_opt(year, 12, 31))
    else {
        return Vec::new();
    };

    start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| day.weekday() == Weekday::Mon)
        .collect()
}

/// Render a week start the way the timetable API expects, e.g. `04-Mar-2024`.
#[must_use]
pub fn format_week_start(date: NaiveDate) -> String {
    date.format(WEEK_START_FORMAT).to_string()
}
