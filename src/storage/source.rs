//! Table sources: where rows come from.
//!
//! The export pipeline only talks to `TableSource`, so any client able to list
//! tables and run a bounded select can feed it. `SqliteSource` is the `sqlx`
//! implementation used by the binary.

use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row as SqlxRow, SqlitePool, TypeInfo, ValueRef};

use crate::error_handling::DatabaseError;
use crate::models::{Row, Value};

use super::pool::init_db_pool_with_path;

/// Read access to a relational database for seed generation.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Name shown in the generated doc block (`Table: <database>.<table>`).
    fn database_name(&self) -> &str;

    /// Verifies the table catalog can be read.
    async fn check_catalog(&self) -> Result<(), DatabaseError>;

    /// Lists every user table, in a stable order.
    async fn list_tables(&self) -> Result<Vec<String>, DatabaseError>;

    /// Selects at most `limit` rows of `table`, skipping the first `offset`.
    async fn fetch_page(
        &self,
        table: &str,
        limit: u32,
        offset: u64,
    ) -> Result<Vec<Row>, DatabaseError>;
}

/// `TableSource` backed by a SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteSource {
    pool: SqlitePool,
    database_name: String,
}

impl SqliteSource {
    pub fn new(pool: SqlitePool, database_name: impl Into<String>) -> Self {
        Self {
            pool,
            database_name: database_name.into(),
        }
    }

    /// Opens `db_path` read-only. The file stem becomes the database name.
    pub async fn open(db_path: &Path) -> Result<Self, DatabaseError> {
        let pool = init_db_pool_with_path(db_path).await?;
        let database_name = db_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "main".to_string());
        Ok(Self::new(pool, database_name))
    }
}

#[async_trait]
impl TableSource for SqliteSource {
    fn database_name(&self) -> &str {
        &self.database_name
    }

    async fn check_catalog(&self) -> Result<(), DatabaseError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sqlite_master")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_tables(&self) -> Result<Vec<String>, DatabaseError> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\'
             ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }

    async fn fetch_page(
        &self,
        table: &str,
        limit: u32,
        offset: u64,
    ) -> Result<Vec<Row>, DatabaseError> {
        let sql = format!(
            "SELECT * FROM {} LIMIT ? OFFSET ?",
            quote_identifier(table)
        );
        let rows = sqlx::query(&sql)
            .bind(i64::from(limit))
            .bind(i64::try_from(offset).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(decode_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DatabaseError::DecodeError(e.to_string()))
    }
}

/// Quotes an SQL identifier, doubling embedded quotes.
pub(crate) fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Converts a SQLite row by the storage class of each value.
///
/// `TEXT` and `BLOB` are both read as bytes and decoded lossily.
fn decode_row(row: &SqliteRow) -> Result<Row, sqlx::Error> {
    let mut decoded = Row::with_capacity(row.columns().len());
    for column in row.columns() {
        let index = column.ordinal();
        let raw = row.try_get_raw(index)?;
        let value = if raw.is_null() {
            Value::Null
        } else {
            let storage = raw.type_info().name().to_ascii_uppercase();
            match storage.as_str() {
                "INTEGER" => Value::from(row.try_get::<i64, _>(index)?),
                "REAL" => Value::from_f64(row.try_get::<f64, _>(index)?),
                // TEXT holds whatever bytes were stored, not necessarily UTF-8
                _ => Value::Text(
                    String::from_utf8_lossy(&row.try_get_unchecked::<Vec<u8>, _>(index)?)
                        .into_owned(),
                ),
            }
        };
        decoded.insert(column.name().to_string(), value);
    }
    Ok(decoded)
}
