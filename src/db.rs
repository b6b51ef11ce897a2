//! Database connection pool types and constructor.
//!
//! The teacher repo pulls these from `pushkind_common::db`; that is a private
//! git dependency, so the same three definitions are inlined here.

use diesel::SqliteConnection;
use diesel::r2d2::{self, ConnectionManager};

/// r2d2 connection pool over SQLite, cheap to clone and share.
pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

/// A connection checked out of [`DbPool`].
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<SqliteConnection>>;

/// Build an r2d2 connection pool for the SQLite database at `database_url`.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, r2d2::PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    r2d2::Pool::builder().build(manager)
}
