//! Shared test helpers for module tests.
//!
//! `MemorySource` is a `TableSource` over in-memory rows that records every
//! page request and can be told to fail at a given offset.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error_handling::DatabaseError;
use crate::models::{Row, Value};
use crate::storage::TableSource;

#[derive(Default)]
pub struct MemorySource {
    tables: Vec<(String, Vec<Row>)>,
    fail_at: HashMap<String, u64>,
    undecodable_at: HashMap<String, u64>,
    fetches: Mutex<Vec<(String, u32, u64)>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table of `count` rows with columns `id` and `name`.
    pub fn with_table(mut self, name: &str, count: usize) -> Self {
        let rows = (1..=count)
            .map(|i| {
                let mut row = Row::new();
                row.insert("id".to_string(), Value::from(i as i64));
                row.insert("name".to_string(), Value::from(format!("{name} {i}")));
                row
            })
            .collect();
        self.tables.push((name.to_string(), rows));
        self
    }

    /// Makes every fetch of `table` at or beyond `offset` fail.
    pub fn failing_at(mut self, table: &str, offset: u64) -> Self {
        self.fail_at.insert(table.to_string(), offset);
        self
    }

    /// Makes every fetch of `table` at or beyond `offset` fail to decode.
    pub fn undecodable_at(mut self, table: &str, offset: u64) -> Self {
        self.undecodable_at.insert(table.to_string(), offset);
        self
    }

    /// Page requests seen so far as `(table, limit, offset)`.
    pub fn fetches(&self) -> Vec<(String, u32, u64)> {
        self.fetches.lock().expect("fetch log poisoned").clone()
    }
}

#[async_trait]
impl TableSource for MemorySource {
    fn database_name(&self) -> &str {
        "memory"
    }

    async fn check_catalog(&self) -> Result<(), DatabaseError> {
        Ok(())
    }

    async fn list_tables(&self) -> Result<Vec<String>, DatabaseError> {
        Ok(self.tables.iter().map(|(name, _)| name.clone()).collect())
    }

    async fn fetch_page(
        &self,
        table: &str,
        limit: u32,
        offset: u64,
    ) -> Result<Vec<Row>, DatabaseError> {
        self.fetches
            .lock()
            .expect("fetch log poisoned")
            .push((table.to_string(), limit, offset));

        if self.fail_at.get(table).is_some_and(|at| offset >= *at) {
            return Err(DatabaseError::SqlError(sqlx::Error::Protocol(format!(
                "simulated failure reading {table}"
            ))));
        }

        if self.undecodable_at.get(table).is_some_and(|at| offset >= *at) {
            return Err(DatabaseError::DecodeError(format!(
                "simulated bad value in {table}"
            )));
        }

        let rows = self
            .tables
            .iter()
            .find(|(name, _)| name == table)
            .map(|(_, rows)| rows)
            .ok_or_else(|| {
                DatabaseError::SqlError(sqlx::Error::Protocol(format!("no such table: {table}")))
            })?;

        Ok(rows
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}
