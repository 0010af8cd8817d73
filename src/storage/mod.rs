// storage/mod.rs
// Database access module

pub mod pool;
pub mod source;

// Re-export commonly used items
pub use pool::init_db_pool_with_path;
pub use source::{SqliteSource, TableSource};

#[cfg(test)]
pub(crate) mod test_helpers;
