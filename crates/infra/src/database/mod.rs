//! Calendar document stores.
//!
//! [`SqliteCalendarStore`] persists documents in a pooled SQLite file;
//! [`InMemoryCalendarStore`] keeps them for the lifetime of the process.

pub mod calendar_repository;
pub mod memory;
pub mod pool;

pub use calendar_repository::SqliteCalendarStore;
pub use memory::InMemoryCalendarStore;
pub use pool::{create_pool, SqlitePool};
