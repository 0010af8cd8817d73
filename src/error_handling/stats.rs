//! Export statistics tracking.
//!
//! Counts non-fatal failures by kind over one run. Exports are sequential, so
//! plain counters are enough.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Per-run failure counters.
///
/// Every `ErrorType` is initialized to zero on creation.
#[derive(Debug, Clone)]
pub struct ExportStats {
    errors: HashMap<ErrorType, usize>,
}

impl ExportStats {
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, 0);
        }
        ExportStats { errors }
    }

    /// Increment an error counter.
    pub fn increment_error(&mut self, error: ErrorType) {
        *self.errors.entry(error).or_insert(0) += 1;
    }

    /// Get the count for an error type.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors.get(&error).copied().unwrap_or(0)
    }

    /// Get total error count across all error types.
    pub fn total_errors(&self) -> usize {
        ErrorType::iter().map(|e| self.get_error_count(e)).sum()
    }
}

impl Default for ExportStats {
    fn default() -> Self {
        Self::new()
    }
}
