//! Export jobs and their results.

use std::path::{Path, PathBuf};

use crate::config::SEED_FILE_EXTENSION;
use crate::error_handling::ExportStats;

/// Converts a table name to StudlyCase: `user_profiles` becomes `UserProfiles`.
///
/// Words are separated by `_`, `-` or spaces; the first letter of each word is
/// upper-cased and the rest left as is.
pub fn studly_case(table: &str) -> String {
    table
        .split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Class name of a table's seeder: `<prefix>_<StudlyTable>`.
pub fn class_name(prefix: &str, table: &str) -> String {
    format!("{}_{}", prefix, studly_case(table))
}

/// One table to export and where its seeder goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJob {
    pub table: String,
    pub class_name: String,
    pub path: PathBuf,
}

impl ExportJob {
    pub fn new(table: &str, seeds_dir: &Path, prefix: &str) -> Self {
        let class_name = class_name(prefix, table);
        let path = seeds_dir.join(format!("{class_name}.{SEED_FILE_EXTENSION}"));
        Self {
            table: table.to_string(),
            class_name,
            path,
        }
    }
}

/// A seeder written successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedSeed {
    pub table: String,
    pub class_name: String,
    pub path: PathBuf,
    /// Rows written across all insert blocks
    pub rows: u64,
    /// Non-empty pages, one insert block each
    pub pages: u64,
}

/// A table whose export was aborted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFailure {
    pub table: String,
    pub message: String,
}

/// Results of a seeding run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Seeders written, in export order
    pub exported: Vec<ExportedSeed>,
    /// Existing seeders left untouched because overwrite was off
    pub conflicts: Vec<PathBuf>,
    /// Existing seeders removed before writing
    pub deleted: Vec<PathBuf>,
    /// Tables skipped because their seeder could not be removed
    pub delete_failures: Vec<TableFailure>,
    /// Tables whose export failed
    pub failures: Vec<TableFailure>,
    /// Failure counters by kind
    pub stats: ExportStats,
}

impl RunReport {
    /// Lines to paste into `DatabaseSeeder.php`, one per exported seeder.
    pub fn registration_lines(&self) -> Vec<String> {
        self.exported
            .iter()
            .map(|seed| format!("{}::class,", seed.class_name))
            .collect()
    }

    /// Whether every requested table was exported.
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty() && self.delete_failures.is_empty() && self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_studly_case() {
        assert_eq!(studly_case("users"), "Users");
        assert_eq!(studly_case("user_profiles"), "UserProfiles");
        assert_eq!(studly_case("order-items"), "OrderItems");
        assert_eq!(studly_case("userRoles"), "UserRoles");
        assert_eq!(studly_case("__double__under"), "DoubleUnder");
        assert_eq!(studly_case("v2_stats"), "V2Stats");
    }

    #[test]
    fn test_export_job_paths() {
        let job = ExportJob::new("user_profiles", Path::new("/app/database/seeders"), "pollinate");
        assert_eq!(job.class_name, "pollinate_UserProfiles");
        assert_eq!(
            job.path,
            PathBuf::from("/app/database/seeders/pollinate_UserProfiles.php")
        );
    }

    #[test]
    fn test_registration_lines() {
        let report = RunReport {
            exported: vec![ExportedSeed {
                table: "users".to_string(),
                class_name: "pollinate_Users".to_string(),
                path: PathBuf::from("pollinate_Users.php"),
                rows: 3,
                pages: 1,
            }],
            ..Default::default()
        };
        assert_eq!(report.registration_lines(), vec!["pollinate_Users::class,"]);
        assert!(report.is_clean());
    }
}
