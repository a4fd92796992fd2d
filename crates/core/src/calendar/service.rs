//! Calendar service - refresh token in, stored calendar id out

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, instrument, warn};
use uoacal_common::validation::{StringValidator, ValidationError};
use uoacal_domain::{CalendarDocument, CreateCalendarRequest, NewCalendar, Result, UoaCalError};

use super::builder::create_calendar;
use super::ports::CalendarStore;
use crate::credentials::ports::IdentityProvider;
use crate::timetable::ports::TimetableSource;
use crate::timetable::TimetableTranslator;

/// Outcome of a failed `createCalendar` call.
///
/// `Display` is the exact message returned to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CreateCalendarError {
    #[error("{0}")]
    InvalidInput(ValidationError),
    #[error("Failed to fetch tokens.")]
    Tokens,
    #[error("Failed to fetch events.")]
    Events,
    /// Covers both document assembly and the store write.
    #[error("Failed to add calendar to database.")]
    Storage,
}

impl From<CreateCalendarError> for UoaCalError {
    fn from(err: CreateCalendarError) -> Self {
        match err {
            CreateCalendarError::InvalidInput(inner) => Self::Validation(inner.to_string()),
            CreateCalendarError::Tokens => Self::TokenExchange(err.to_string()),
            CreateCalendarError::Events => Self::Fetch(err.to_string()),
            CreateCalendarError::Storage => Self::Persistence(err.to_string()),
        }
    }
}

pub struct CalendarService {
    identity: Arc<dyn IdentityProvider>,
    translator: TimetableTranslator,
    store: Arc<dyn CalendarStore>,
}

impl CalendarService {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        source: Arc<dyn TimetableSource>,
        store: Arc<dyn CalendarStore>,
    ) -> Self {
        Self { identity, translator: TimetableTranslator::new(source), store }
    }

    /// Build this year's calendar for the owner of `refresh_token` and store
    /// it together with the token.
    ///
    /// Tokens are exchanged fresh on every call and never cached.
    #[instrument(skip_all)]
    pub async fn create_calendar(
        &self,
        request: &CreateCalendarRequest,
    ) -> std::result::Result<String, CreateCalendarError> {
        let mut errors = ValidationError::new();
        errors.check("refreshToken", &request.refresh_token, &StringValidator::new().not_empty());
        errors.into_result().map_err(CreateCalendarError::InvalidInput)?;

        let tokens =
            self.identity.tokens_from_refresh_token(&request.refresh_token).await.map_err(|err| {
                warn!(error = %err, "refresh token exchange failed");
                CreateCalendarError::Tokens
            })?;

        let events = self.translator.get_events(&tokens).await.map_err(|err| {
            warn!(error = %err, "timetable fetch failed");
            CreateCalendarError::Events
        })?;

        let data = create_calendar(&tokens.id_token, events).map_err(|err| {
            warn!(error = %err, "calendar document could not be built");
            CreateCalendarError::Storage
        })?;

        let id = self
            .store
            .add(NewCalendar { data, refresh_token: Some(request.refresh_token.clone()) })
            .await
            .map_err(|err| {
                warn!(error = %err, "calendar store write failed");
                CreateCalendarError::Storage
            })?;

        info!(calendar_id = %id, "calendar created");
        Ok(id)
    }

    /// Load and decode a stored document for rendering.
    ///
    /// Errors: `InvalidInput` for a blank id, `NotFound` for an unknown id,
    /// `CorruptData` when the stored payload does not decode, and whatever the
    /// store reports for read failures.
    #[instrument(skip(self))]
    pub async fn load_document(&self, id: &str) -> Result<CalendarDocument> {
        if id.trim().is_empty() {
            return Err(UoaCalError::InvalidInput("calendar id is required".into()));
        }

        let stored = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| UoaCalError::NotFound(format!("calendar {id}")))?;

        CalendarDocument::from_json(&stored.data)
    }
}
