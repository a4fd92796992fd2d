use icalendar::{Calendar, Component, Event, EventLike};
use uoacal_domain::{CalendarDocument, CalendarEvent, CalendarMethod};

/// MIME type served for rendered calendars.
pub const CALENDAR_CONTENT_TYPE: &str = "text/calendar; charset=utf-8";

const UID_DOMAIN: &str = "better-uoa-cal";

/// Render a document as RFC 5545 text.
///
/// Output is stable for a given document apart from `DTSTAMP`, so calendar
/// clients re-subscribing to the same id see the same event identities.
pub fn render_calendar(document: &CalendarDocument) -> String {
    let mut calendar = Calendar::new();
    calendar.name(&document.name);
    calendar.append_property(("METHOD", method_value(document.method)));

    for (index, event) in document.events.iter().enumerate() {
        calendar.push(render_event(index, event));
    }

    calendar.done().to_string()
}

/// `UID` of the event at `index`.
pub fn event_uid(index: usize, event: &CalendarEvent) -> String {
    format!("{}-{index}@{UID_DOMAIN}", event.start.timestamp())
}

fn render_event(index: usize, event: &CalendarEvent) -> Event {
    Event::new()
        .uid(&event_uid(index, event))
        .summary(&event.summary)
        .description(&event.description)
        .location(&event.location)
        .starts(event.start)
        .ends(event.end)
        .done()
}

fn method_value(method: CalendarMethod) -> &'static str {
    match method {
        CalendarMethod::Request => "REQUEST",
    }
}
