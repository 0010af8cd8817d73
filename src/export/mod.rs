//! Seed export pipeline.
//!
//! Resolves the tables to seed, guards existing seeders, then pages through
//! each table and streams a seeder file per table:
//!
//! - `tables`: which tables a run covers
//! - `guard`: shared seeder names and seeders that already exist
//! - `pager`: limit/offset pagination over one table
//! - `format`: PHP literals for rows
//! - `template`: boilerplate around the rows
//! - `writer`: one seeder file, removed again on failure

mod format;
mod guard;
mod pager;
mod tables;
mod template;
mod types;
mod writer;

pub use format::{format_row, format_rows, format_value, looks_numeric, quote};
pub use guard::{apply_overwrite_policy, conflict_message, split_name_collisions, GuardOutcome};
pub use pager::RowPager;
pub use tables::resolve_tables;
pub use template::{indent, SeedMetadata, SeederStub};
pub use types::{class_name, studly_case, ExportJob, ExportedSeed, RunReport, TableFailure};
pub use writer::{write_seed, WriteContext};
