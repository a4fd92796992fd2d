use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use uoacal_core::TimetableSource;
use uoacal_domain::{EventSource, Result as DomainResult, TimetableEntry, UoaCalError};

/// One lecture at 21:00 UTC on the given Monday.
pub fn lecture_on(monday: NaiveDate, course_code: &str) -> TimetableEntry {
    let start = monday.and_hms_opt(21, 0, 0).unwrap().and_utc().timestamp_millis() as f64;
    TimetableEntry {
        campus: "City".into(),
        course_code: course_code.into(),
        course_name: "Course".into(),
        event_time: start,
        event_type: "Lecture".into(),
        map_url: "https://maps.auckland.ac.nz/302".into(),
        room: "302-G20".into(),
        source: EventSource::Timetable,
        time_end_display: "10:00 AM".into(),
        time_start_display: "9:00 AM".into(),
        timestamp_end: start + 3_600_000.0,
        timestamp_start: start,
        kind: "LEC".into(),
    }
}

/// Timetable feed returning one lecture per requested week.
///
/// Weeks listed in `failing_weeks` answer with a fetch error instead.
#[derive(Default)]
pub struct MockTimetableSource {
    pub failing_weeks: Vec<NaiveDate>,
    pub empty: bool,
    pub requested: Mutex<Vec<(String, NaiveDate)>>,
}

impl MockTimetableSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(week: NaiveDate) -> Self {
        Self { failing_weeks: vec![week], ..Self::default() }
    }

    pub fn requested_weeks(&self) -> Vec<NaiveDate> {
        self.requested.lock().unwrap().iter().map(|(_, week)| *week).collect()
    }
}

#[async_trait]
impl TimetableSource for MockTimetableSource {
    async fn fetch_week(
        &self,
        access_token: &str,
        week_start: NaiveDate,
    ) -> DomainResult<Vec<TimetableEntry>> {
        self.requested.lock().unwrap().push((access_token.to_string(), week_start));
        if self.failing_weeks.contains(&week_start) {
            return Err(UoaCalError::Fetch(format!("week {week_start} returned 500")));
        }
        if self.empty {
            return Ok(Vec::new());
        }
        Ok(vec![lecture_on(week_start, &format!("WEEK {}", week_start.format("%m%d")))])
    }
}
