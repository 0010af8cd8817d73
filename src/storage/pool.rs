//! Database connection pool management.
//!
//! Seeds are generated from a snapshot, so the SQLite database is opened
//! read-only and never created.

use std::path::Path;

use log::{debug, error};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;

/// Opens a read-only connection pool for an existing SQLite database file.
///
/// A single connection is enough: tables are read one page at a time.
pub async fn init_db_pool_with_path(db_path: &Path) -> Result<SqlitePool, DatabaseError> {
    if !db_path.is_file() {
        error!("Database file not found: {}", db_path.display());
        return Err(DatabaseError::ConnectionError(format!(
            "database file not found: {}",
            db_path.display()
        )));
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {e}");
            DatabaseError::SqlError(e)
        })?;

    debug!("Opened {} read-only", db_path.display());
    Ok(pool)
}
