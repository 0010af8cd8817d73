//! Error type definitions.
//!
//! Fatal errors (`InitializationError`, `PreflightError`, `DatabaseError` while
//! connecting) stop the run. `ExportError` aborts one table only.

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The database could not be opened.
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// The query ran but a returned value could not be converted.
    #[error("Value decode error: {0}")]
    DecodeError(String),
}

/// Conditions that make a run impossible before any table is touched.
#[derive(Error, Debug)]
pub enum PreflightError {
    /// A runtime prerequisite is missing (unusable stub, unreadable catalog).
    #[error("Environment unsupported: {0}")]
    EnvironmentUnsupported(String),

    /// None of the candidate seeder directories exists.
    #[error("No valid seeder directory at:{}", format_candidates(.candidates))]
    DirectoryNotFound {
        /// Every path that was checked, in lookup order
        candidates: Vec<PathBuf>,
    },

    /// The seeder directory exists but files cannot be created in it.
    #[error("Cannot write to {}: {source}", .path.display())]
    DirectoryNotWritable {
        /// The seeder directory
        path: PathBuf,
        /// Why the write probe failed
        #[source]
        source: std::io::Error,
    },
}

fn format_candidates(candidates: &[PathBuf]) -> String {
    candidates
        .iter()
        .map(|p| format!("\n* {}", p.display()))
        .collect()
}

/// Failures that abort the export of a single table.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Selecting rows failed, usually because the table does not exist.
    #[error("Table '{table}' does not exist or cannot be read. Seed not written.")]
    TableUnavailable {
        /// Table being exported
        table: String,
        /// Underlying query failure
        #[source]
        source: DatabaseError,
    },

    /// A row was selected but one of its values could not be read.
    #[error("Table '{table}' has a value that cannot be decoded. Seed not written.")]
    RowDecodeFailed {
        /// Table being exported
        table: String,
        /// Underlying decode failure
        #[source]
        source: DatabaseError,
    },

    /// Another table of the run already maps to this seeder file.
    #[error(
        "Table '{table}' maps to {} like table '{first}'. Seed not written.",
        .path.display()
    )]
    NameCollision {
        /// Table whose seeder was skipped
        table: String,
        /// Earlier table that keeps the seeder
        first: String,
        /// Shared seeder file path
        path: PathBuf,
    },

    /// The seeder file could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailed {
        /// Seeder file path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// Category used for end-of-run statistics.
    pub fn error_type(&self) -> ErrorType {
        match self {
            ExportError::TableUnavailable { .. } => ErrorType::TableUnavailable,
            ExportError::RowDecodeFailed { .. } => ErrorType::RowDecodeFailed,
            ExportError::NameCollision { .. } => ErrorType::NameCollision,
            ExportError::WriteFailed { .. } => ErrorType::WriteFailed,
        }
    }
}

/// Kinds of non-fatal failures counted during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    TableUnavailable,
    RowDecodeFailed,
    NameCollision,
    WriteFailed,
    FileConflict,
    DeleteFailed,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::TableUnavailable => "Table unavailable",
            ErrorType::RowDecodeFailed => "Row value could not be decoded",
            ErrorType::NameCollision => "Seed file name shared with another table",
            ErrorType::WriteFailed => "Seed file write failed",
            ErrorType::FileConflict => "Existing seed file (not overwritten)",
            ErrorType::DeleteFailed => "Existing seed file could not be deleted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_labels_are_unique() {
        let labels: Vec<&str> = ErrorType::iter().map(|e| e.as_str()).collect();
        let mut deduped = labels.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(labels.len(), deduped.len());
    }

    #[test]
    fn test_directory_not_found_lists_candidates() {
        let err = PreflightError::DirectoryNotFound {
            candidates: vec![
                PathBuf::from("/app/database/seeders"),
                PathBuf::from("/app/database/seeds"),
            ],
        };
        assert_eq!(
            err.to_string(),
            "No valid seeder directory at:\n* /app/database/seeders\n* /app/database/seeds"
        );
    }

    #[test]
    fn test_export_error_type_mapping() {
        let err = ExportError::TableUnavailable {
            table: "ghosts".to_string(),
            source: DatabaseError::SqlError(sqlx::Error::RowNotFound),
        };
        assert_eq!(err.error_type(), ErrorType::TableUnavailable);
        assert!(err.to_string().contains("'ghosts'"));

        let err = ExportError::WriteFailed {
            path: PathBuf::from("x.php"),
            source: std::io::Error::other("disk full"),
        };
        assert_eq!(err.error_type(), ErrorType::WriteFailed);

        let err = ExportError::RowDecodeFailed {
            table: "t".to_string(),
            source: DatabaseError::DecodeError("bad value".to_string()),
        };
        assert_eq!(err.error_type(), ErrorType::RowDecodeFailed);
        assert!(!err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_name_collision_names_both_tables() {
        let err = ExportError::NameCollision {
            table: "userRoles".to_string(),
            first: "user_roles".to_string(),
            path: PathBuf::from("pollinate_UserRoles.php"),
        };
        assert_eq!(err.error_type(), ErrorType::NameCollision);
        assert_eq!(
            err.to_string(),
            "Table 'userRoles' maps to pollinate_UserRoles.php like table 'user_roles'. Seed not written."
        );
    }
}
