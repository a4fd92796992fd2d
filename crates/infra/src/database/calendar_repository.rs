//! SQLite implementation of the [`CalendarStore`] port.

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use tracing::{debug, instrument};
use uoacal_core::CalendarStore;
use uoacal_domain::{DatabaseConfig, NewCalendar, Result, StoredCalendar, UoaCalError};
use uuid::Uuid;

use super::pool::{create_pool, SqlitePool};
use crate::errors::InfraError;

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS calendars (
    id TEXT PRIMARY KEY,
    data TEXT NOT NULL,
    refresh_token TEXT,
    created_at INTEGER NOT NULL
)";

#[derive(Clone)]
pub struct SqliteCalendarStore {
    pool: SqlitePool,
}

impl SqliteCalendarStore {
    /// Wrap an existing pool. Call [`Self::migrate`] before first use.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the configured database file and ensure the schema exists.
    pub fn open(config: &DatabaseConfig) -> Result<Self> {
        let pool = create_pool(Path::new(&config.path), config.pool_size)?;
        let store = Self::new(pool);
        store.migrate()?;
        Ok(store)
    }

    pub fn migrate(&self) -> Result<()> {
        let conn = self.pool.get().map_err(map_pool_error)?;
        conn.execute_batch(SCHEMA_SQL).map_err(map_sql_error)?;
        Ok(())
    }

    async fn run_blocking<T, F>(&self, task: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&SqlitePool) -> Result<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || task(&pool))
            .await
            .map_err(|err| UoaCalError::Internal(format!("store task panicked: {err}")))?
    }
}

#[async_trait]
impl CalendarStore for SqliteCalendarStore {
    #[instrument(skip(self, calendar), fields(data_len = calendar.data.len()))]
    async fn add(&self, calendar: NewCalendar) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now().timestamp();

        let row_id = id.clone();
        self.run_blocking(move |pool| {
            let conn = pool.get().map_err(map_pool_error)?;
            conn.execute(
                "INSERT INTO calendars (id, data, refresh_token, created_at) VALUES (?1, ?2, ?3, ?4)",
                params![row_id, calendar.data, calendar.refresh_token, created_at],
            )
            .map_err(map_sql_error)?;
            Ok(())
        })
        .await?;

        debug!(%id, "calendar stored");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &str) -> Result<Option<StoredCalendar>> {
        let id = id.to_owned();
        self.run_blocking(move |pool| {
            let conn = pool.get().map_err(map_pool_error)?;
            conn.query_row(
                "SELECT id, data, refresh_token, created_at FROM calendars WHERE id = ?1",
                params![id],
                |row| {
                    Ok(StoredCalendar {
                        id: row.get(0)?,
                        data: row.get(1)?,
                        refresh_token: row.get(2)?,
                        created_at: row.get(3)?,
                    })
                },
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
    }
}

fn map_sql_error(err: rusqlite::Error) -> UoaCalError {
    UoaCalError::from(InfraError::from(err))
}

fn map_pool_error(err: r2d2::Error) -> UoaCalError {
    UoaCalError::from(InfraError::from(err))
}
