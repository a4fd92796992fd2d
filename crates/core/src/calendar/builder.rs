//! Calendar document assembly from an id token and translated events.

use uoacal_common::auth::display_name;
use uoacal_domain::{calendar_title, CalendarDocument, CalendarEvent, Result, UoaCalError};

/// Build the document titled after the `name` claim of `id_token`.
///
/// The token signature is not verified. A missing or non-string claim falls
/// back to the generic title; a payload that cannot be decoded fails.
pub fn build_document(id_token: &str, events: Vec<CalendarEvent>) -> Result<CalendarDocument> {
    let name = display_name(id_token)
        .map_err(|err| UoaCalError::InvalidInput(format!("unreadable id token: {err}")))?;

    Ok(CalendarDocument::new(calendar_title(name.as_deref()), events))
}

/// Build the document and serialize it for the store.
pub fn create_calendar(id_token: &str, events: Vec<CalendarEvent>) -> Result<String> {
    build_document(id_token, events)?.to_json()
}
