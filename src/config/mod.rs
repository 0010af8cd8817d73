//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, denylist, file layout)
//! - CLI option types and parsing
//! - The library `Config` and its validation

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{parse_table_list, Config, ConfigValidationError, LogFormat, LogLevel, Opt};
