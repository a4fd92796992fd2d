//! Timetable translator - one year of weekly fetches flattened into events

use std::sync::Arc;

use chrono::{DateTime, Datelike, Local, Utc};
use futures::future::try_join_all;
use tracing::{debug, info};
use uoacal_common::time::mondays_in_year;
use uoacal_domain::utils::title::{event_location, event_summary};
use uoacal_domain::{CalendarEvent, Result, TimetableEntry, Tokens};

use super::ports::TimetableSource;

/// Millisecond timestamp to UTC. Sub-millisecond fractions are truncated.
fn from_millis(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() {
        return None;
    }
    let truncated = millis.trunc();
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let millis = truncated as i64;
    DateTime::from_timestamp_millis(millis)
}

/// Map one upstream entry onto a calendar event.
///
/// Returns `None` when a timestamp is outside the representable range.
pub fn to_calendar_event(entry: &TimetableEntry) -> Option<CalendarEvent> {
    Some(CalendarEvent {
        start: from_millis(entry.timestamp_start)?,
        end: from_millis(entry.timestamp_end)?,
        summary: event_summary(&entry.course_code, &entry.kind),
        location: event_location(&entry.room, &entry.campus),
        description: entry.event_type.clone(),
    })
}

pub struct TimetableTranslator {
    source: Arc<dyn TimetableSource>,
}

impl TimetableTranslator {
    pub fn new(source: Arc<dyn TimetableSource>) -> Self {
        Self { source }
    }

    /// Every event of the current calendar year (server local time).
    pub async fn get_events(&self, tokens: &Tokens) -> Result<Vec<CalendarEvent>> {
        self.get_events_for_year(tokens, Local::now().year()).await
    }

    /// Every event of `year`, including the week that contains January 1.
    ///
    /// All weeks are requested concurrently. One failed week fails the whole
    /// call and the weeks that did succeed are discarded. Events keep the
    /// order in which their weeks were requested.
    pub async fn get_events_for_year(
        &self,
        tokens: &Tokens,
        year: i32,
    ) -> Result<Vec<CalendarEvent>> {
        let mondays = mondays_in_year(year);
        debug!(year, weeks = mondays.len(), "requesting timetable weeks");

        let weeks = try_join_all(
            mondays.into_iter().map(|monday| self.source.fetch_week(&tokens.access_token, monday)),
        )
        .await?;

        let events: Vec<CalendarEvent> =
            weeks.iter().flatten().filter_map(to_calendar_event).collect();

        info!(year, events = events.len(), "timetable translated");
        Ok(events)
    }
}
