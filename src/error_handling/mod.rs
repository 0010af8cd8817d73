//! Error handling and export statistics.
//!
//! This module provides:
//! - Error type definitions for initialization, preflight, database and export failures
//! - Failure counters reported at the end of a run

mod stats;
mod types;

// Re-export public API
pub use stats::ExportStats;
pub use types::{DatabaseError, ErrorType, ExportError, InitializationError, PreflightError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_export_stats_initialization() {
        let stats = ExportStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        assert_eq!(stats.total_errors(), 0);
    }

    #[test]
    fn test_export_stats_increment() {
        let mut stats = ExportStats::new();
        stats.increment_error(ErrorType::FileConflict);
        stats.increment_error(ErrorType::FileConflict);
        stats.increment_error(ErrorType::TableUnavailable);

        assert_eq!(stats.get_error_count(ErrorType::FileConflict), 2);
        assert_eq!(stats.get_error_count(ErrorType::TableUnavailable), 1);
        assert_eq!(stats.get_error_count(ErrorType::DeleteFailed), 0);
        assert_eq!(stats.total_errors(), 3);
    }
}
