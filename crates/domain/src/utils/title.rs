//! Pure string utility functions for calendar and event titles

use crate::constants::CALENDAR_TITLE;

/// Calendar title for a user's display name.
///
/// Only a missing name falls back to the generic title. The name is used
/// verbatim, whitespace included.
///
/// # Examples
///
/// ```
/// use uoacal_domain::utils::title::calendar_title;
///
/// assert_eq!(calendar_title(Some("Alice")), "Timetable - Alice");
/// assert_eq!(calendar_title(None), "Timetable");
/// ```
#[must_use]
pub fn calendar_title(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{CALENDAR_TITLE} - {name}"),
        None => CALENDAR_TITLE.to_string(),
    }
}

/// `"{course_code} - {type}"`, e.g. `"COMPSCI 110 - LEC"`.
#[must_use]
pub fn event_summary(course_code: &str, kind: &str) -> String {
    format!("{course_code} - {kind}")
}

/// `"{room} ({campus} Campus)"`, e.g. `"302-G20 (City Campus)"`.
#[must_use]
pub fn event_location(room: &str, campus: &str) -> String {
    format!("{room} ({campus} Campus)")
}
