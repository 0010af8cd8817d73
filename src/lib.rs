//! pollinate library: seed files from database tables
//!
//! Reads every row of the selected tables and writes one Laravel seeder class
//! per table that deletes the table's rows and reinserts the snapshot.
//!
//! # Example
//!
//! ```no_run
//! use pollinate::{Config, run_pollinate};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     db_path: "database/database.sqlite".into(),
//!     tables: Some(vec!["users".to_string(), "orders".to_string()]),
//!     ..Default::default()
//! };
//!
//! let report = run_pollinate(config).await?;
//! for line in report.registration_lines() {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime (`sqlx` is async).

mod app;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod models;
pub mod storage;

// Re-export public API
pub use app::{listing_text, registration_text, resolve_seeds_directory, SeedsDirectory};
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel, Opt};
pub use export::{RunReport, SeedMetadata};
pub use run::{list_tables, run_pollinate, run_with_source};
pub use storage::{SqliteSource, TableSource};

mod run {
    use anyhow::{Context, Result};
    use log::{error, warn};

    use crate::app::{preflight, print_error_statistics, print_simple_summary};
    use crate::config::Config;
    use crate::error_handling::{ErrorType, ExportError, ExportStats};
    use crate::export::{
        apply_overwrite_policy, resolve_tables, split_name_collisions, write_seed, ExportJob,
        RunReport, SeedMetadata, TableFailure, WriteContext,
    };
    use crate::storage::{SqliteSource, TableSource};

    /// Seeds every selected table of the SQLite database at `config.db_path`.
    ///
    /// Metadata for the doc blocks (user, host, time) is taken from the running
    /// process.
    ///
    /// # Errors
    ///
    /// Fails only on fatal conditions: invalid configuration, unopenable
    /// database, missing or unwritable seeders directory, unusable stub or
    /// catalog. Per-table problems are reported in the returned `RunReport`.
    pub async fn run_pollinate(config: Config) -> Result<RunReport> {
        config.validate()?;
        let source = SqliteSource::open(&config.db_path)
            .await
            .context("Failed to open database")?;
        let metadata = SeedMetadata::collect(source.database_name(), config.environment.clone());
        run_with_source(&source, &config, &metadata).await
    }

    /// Runs the export pipeline against any table source.
    pub async fn run_with_source<S: TableSource + ?Sized>(
        source: &S,
        config: &Config,
        metadata: &SeedMetadata,
    ) -> Result<RunReport> {
        config.validate()?;
        let checked = preflight(source, config).await?;

        let tables = resolve_tables(source, config.tables.as_deref(), &config.ignore_tables)
            .await
            .context("Failed to list tables")?;
        if tables.is_empty() {
            warn!("No tables to seed");
        }

        let jobs: Vec<ExportJob> = tables
            .iter()
            .map(|table| ExportJob::new(table, &checked.seeds.path, &config.prefix))
            .collect();
        let (jobs, collisions) = split_name_collisions(jobs);
        let guarded = apply_overwrite_policy(jobs, config.overwrite);

        let mut stats = ExportStats::new();
        let mut failures = Vec::new();
        for e in collisions {
            error!("{e}");
            stats.increment_error(e.error_type());
            if let ExportError::NameCollision { table, .. } = &e {
                failures.push(TableFailure {
                    table: table.clone(),
                    message: e.to_string(),
                });
            }
        }
        for _ in &guarded.blocked {
            stats.increment_error(ErrorType::FileConflict);
        }
        for _ in &guarded.delete_failures {
            stats.increment_error(ErrorType::DeleteFailed);
        }

        let ctx = WriteContext {
            stub: &checked.stub,
            namespace: &checked.seeds.namespace,
            metadata,
            page_size: config.page_size,
        };

        let mut exported = Vec::with_capacity(guarded.jobs.len());
        for job in &guarded.jobs {
            match write_seed(source, job, &ctx).await {
                Ok(seed) => exported.push(seed),
                Err(e) => {
                    match std::error::Error::source(&e) {
                        Some(cause) => error!("{e} ({cause})"),
                        None => error!("{e}"),
                    }
                    stats.increment_error(e.error_type());
                    failures.push(TableFailure {
                        table: job.table.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        let report = RunReport {
            exported,
            conflicts: guarded.blocked.into_iter().map(|job| job.path).collect(),
            deleted: guarded.deleted,
            delete_failures: guarded.delete_failures,
            failures,
            stats,
        };

        print_error_statistics(&report.stats);
        print_simple_summary(&report);
        Ok(report)
    }

    /// Tables a run with `config` would export, without exporting anything.
    pub async fn list_tables(config: &Config) -> Result<Vec<String>> {
        let source = SqliteSource::open(&config.db_path)
            .await
            .context("Failed to open database")?;
        resolve_tables(&source, config.tables.as_deref(), &config.ignore_tables)
            .await
            .context("Failed to list tables")
    }
}
