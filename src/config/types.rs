//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::sync::LazyLock;

use clap::{Parser, ValueEnum};
use regex::Regex;
use thiserror::Error;

use crate::config::constants::{
    DEFAULT_DB_PATH, DEFAULT_ENVIRONMENT, DEFAULT_PAGE_SIZE, DEFAULT_PREFIX, IGNORED_TABLES,
};

static PHP_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid")
});

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Seed every table except the denylisted ones
/// pollinate
///
/// # Seed two tables, ten rows per insert, replacing existing seeders
/// pollinate users,orders --page-size 10 --overwrite
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "pollinate",
    version,
    about = "Create seed files from the database.",
    long_about = "Create seed files from the database.\n  \
                  Accepts an optional comma-separated list of tables to seed.\n  \
                  If no tables list is provided, all tables are seeded."
)]
pub struct Opt {
    /// Comma-separated list of tables to seed
    pub tables: Option<String>,

    /// SQLite database to read from
    #[arg(long, env = "DB_DATABASE", default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// Project root containing `database/seeders` (or `database/seeds`)
    #[arg(long, default_value = ".")]
    pub base_path: PathBuf,

    /// Prefix to file and class names
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Number of records per insert
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: u32,

    /// Overwrite existing seeder files of the same name
    #[arg(long)]
    pub overwrite: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub silent: bool,

    /// Show tables that can be seeded
    #[arg(long)]
    pub show_tables: bool,

    /// Show tables that will be ignored unless explicitly requested
    #[arg(long)]
    pub show_ignored: bool,

    /// Additional tables to ignore during auto-discovery (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Environment name recorded in generated files
    #[arg(long = "env", env = "APP_ENV", default_value = DEFAULT_ENVIRONMENT)]
    pub environment: String,

    /// Seeder stub to use instead of the published or built-in one
    #[arg(long)]
    pub stub: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use pollinate::Config;
///
/// let config = Config {
///     tables: Some(vec!["users".to_string()]),
///     page_size: 50,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database path
    pub db_path: PathBuf,

    /// Project root holding `database/seeders`
    pub base_path: PathBuf,

    /// Prefix for generated class and file names
    pub prefix: String,

    /// Rows fetched per page (and per insert block)
    pub page_size: u32,

    /// Replace existing seeder files instead of skipping their tables
    pub overwrite: bool,

    /// Suppress informational output
    pub silent: bool,

    /// Explicit tables to export; `None` means every table not ignored
    pub tables: Option<Vec<String>>,

    /// Tables excluded from auto-discovery
    pub ignore_tables: Vec<String>,

    /// Environment name recorded in generated files
    pub environment: String,

    /// Explicit seeder stub path
    pub stub: Option<PathBuf>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            base_path: PathBuf::from("."),
            prefix: DEFAULT_PREFIX.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            overwrite: false,
            silent: false,
            tables: None,
            ignore_tables: IGNORED_TABLES.iter().map(|t| t.to_string()).collect(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            stub: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        let mut ignore_tables: Vec<String> = IGNORED_TABLES.iter().map(|t| t.to_string()).collect();
        for extra in opt.ignore {
            let extra = extra.trim();
            if !extra.is_empty() && !ignore_tables.iter().any(|t| t == extra) {
                ignore_tables.push(extra.to_string());
            }
        }

        Self {
            db_path: opt.db_path,
            base_path: opt.base_path,
            prefix: opt.prefix,
            page_size: opt.page_size,
            overwrite: opt.overwrite,
            silent: opt.silent,
            tables: opt.tables.as_deref().map(parse_table_list),
            ignore_tables,
            environment: opt.environment,
            stub: opt.stub,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}

/// A configuration field that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is accepted instead
    pub message: String,
}

impl Config {
    /// Checks values that clap cannot check for library callers.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.page_size == 0 {
            return Err(ConfigValidationError {
                field: "page_size",
                message: "page size must be greater than 0".to_string(),
            });
        }
        if !PHP_IDENTIFIER.is_match(&self.prefix) {
            return Err(ConfigValidationError {
                field: "prefix",
                message: format!(
                    "'{}' is not usable in a PHP class name (letters, digits and '_' only, not starting with a digit)",
                    self.prefix
                ),
            });
        }
        if let Some(tables) = &self.tables {
            if tables.is_empty() {
                return Err(ConfigValidationError {
                    field: "tables",
                    message: "explicit table list is empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Log level after applying `silent`.
    ///
    /// Silent runs keep warnings and errors only.
    pub fn effective_log_level(&self) -> log::LevelFilter {
        let level = log::LevelFilter::from(self.log_level.clone());
        if self.silent {
            level.min(log::LevelFilter::Warn)
        } else {
            level
        }
    }
}

/// Splits a comma-separated table list.
///
/// Entries are trimmed, empty entries dropped, and duplicates removed keeping
/// the first occurrence, so the result is an ordered set.
pub fn parse_table_list(raw: &str) -> Vec<String> {
    let mut tables: Vec<String> = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        if !tables.iter().any(|t| t == name) {
            tables.push(name.to_string());
        }
    }
    tables
}
