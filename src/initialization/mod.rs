//! Application initialization.
//!
//! Currently only the logger; the database pool lives in `storage`.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
