//! Application context - dependency injection container

use std::sync::Arc;

use tracing::info;
use uoacal_core::{
    CalendarService, CalendarStore, CredentialService, IdentityProvider, TimetableSource,
};
use uoacal_domain::{Config, DatabaseConfig, Result};
use uoacal_infra::{
    CognitoIdentityProvider, InMemoryCalendarStore, SqliteCalendarStore, TimetableClient,
};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub credentials: Arc<CredentialService>,
    pub calendars: Arc<CalendarService>,
}

impl AppContext {
    /// Wire the production adapters from `config`.
    pub fn new(config: Config) -> Result<Self> {
        let identity: Arc<dyn IdentityProvider> =
            Arc::new(CognitoIdentityProvider::new(config.identity.clone(), &config.http)?);
        let timetable: Arc<dyn TimetableSource> =
            Arc::new(TimetableClient::new(config.timetable.clone(), &config.http)?);
        let store = open_store(&config.database)?;

        Ok(Self::from_parts(config, identity, timetable, store))
    }

    /// Assemble a context from already built ports.
    pub fn from_parts(
        config: Config,
        identity: Arc<dyn IdentityProvider>,
        timetable: Arc<dyn TimetableSource>,
        store: Arc<dyn CalendarStore>,
    ) -> Self {
        let credentials = Arc::new(CredentialService::new(Arc::clone(&identity)));
        let calendars = Arc::new(CalendarService::new(identity, timetable, store));
        Self { config, credentials, calendars }
    }
}

fn open_store(config: &DatabaseConfig) -> Result<Arc<dyn CalendarStore>> {
    if config.is_in_memory() {
        info!("calendars kept in memory; they are lost on restart");
        return Ok(Arc::new(InMemoryCalendarStore::new()));
    }

    let store = SqliteCalendarStore::open(config)?;
    info!(db_path = %config.path, "calendar database ready");
    Ok(Arc::new(store))
}
