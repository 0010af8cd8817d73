//! Table-name resolution.

use crate::error_handling::DatabaseError;
use crate::storage::TableSource;

/// Decides which tables a run exports.
///
/// An explicit list is used as given (deduplicated, first occurrence wins) and
/// bypasses the denylist. Otherwise every table of the source is listed and
/// the `ignored` ones are removed.
pub async fn resolve_tables<S: TableSource + ?Sized>(
    source: &S,
    explicit: Option<&[String]>,
    ignored: &[String],
) -> Result<Vec<String>, DatabaseError> {
    let candidates = match explicit {
        Some(tables) => tables.to_vec(),
        None => source
            .list_tables()
            .await?
            .into_iter()
            .filter(|t| !ignored.contains(t))
            .collect(),
    };

    let mut tables: Vec<String> = Vec::with_capacity(candidates.len());
    for table in candidates {
        if !tables.contains(&table) {
            tables.push(table);
        }
    }
    Ok(tables)
}
