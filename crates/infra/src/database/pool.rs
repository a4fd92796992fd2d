//! r2d2 pool over plain SQLite files.

use std::path::Path;
use std::time::Duration;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use tracing::{info, warn};
use uoacal_domain::{Result, UoaCalError};

pub type SqlitePool = Pool<SqliteConnectionManager>;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Open (creating if needed) the database at `path`.
pub fn create_pool(path: &Path, pool_size: u32) -> Result<SqlitePool> {
    let manager =
        SqliteConnectionManager::file(path).with_init(|conn| conn.busy_timeout(BUSY_TIMEOUT));

    let pool = Pool::builder()
        .max_size(pool_size.max(1))
        .connection_timeout(CONNECTION_TIMEOUT)
        .build(manager)
        .map_err(|err| {
            warn!(db_path = %path.display(), error = %err, "failed to create sqlite pool");
            UoaCalError::Persistence(format!("failed to open {}: {err}", path.display()))
        })?;

    info!(db_path = %path.display(), max_connections = pool.max_size(), "sqlite pool initialised");
    Ok(pool)
}
