//! Main application modules.
//!
//! This module provides the preflight checks and the end-of-run output used by
//! the library and the binary.

pub mod preflight;
pub mod statistics;

// Re-export public API
pub use preflight::{preflight, resolve_seeds_directory, Preflight, SeedsDirectory};
pub use statistics::{
    listing_text, print_error_statistics, print_simple_summary, registration_text,
};
