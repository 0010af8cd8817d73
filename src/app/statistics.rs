//! End-of-run output: error counters, seeder registration and table listings.

use log::{info, warn};
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, ExportStats};
use crate::export::RunReport;

/// Logs the failure counters of a run, if any failure occurred.
pub fn print_error_statistics(stats: &ExportStats) {
    let total_errors = stats.total_errors();
    if total_errors > 0 {
        warn!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = stats.get_error_count(error_type);
            if count > 0 {
                warn!("   {}: {}", error_type.as_str(), count);
            }
        }
    }
}

/// Logs a one-line summary of the run.
pub fn print_simple_summary(report: &RunReport) {
    let rows: u64 = report.exported.iter().map(|s| s.rows).sum();
    info!(
        "Seeded {} table{} ({} rows), {} skipped",
        report.exported.len(),
        if report.exported.len() == 1 { "" } else { "s" },
        rows,
        report.conflicts.len() + report.delete_failures.len() + report.failures.len()
    );
}

/// Text telling the user which seeders to register, empty if nothing was seeded.
pub fn registration_text(report: &RunReport) -> String {
    let lines = report.registration_lines();
    if lines.is_empty() {
        return String::new();
    }
    let mut text = String::from("\nAdd this to DatabaseSeeder.php\n");
    for line in lines {
        text.push_str(&line);
        text.push('\n');
    }
    text
}

/// A titled bullet list, as printed by `--show-tables` and `--show-ignored`.
pub fn listing_text(title: &str, names: &[String]) -> String {
    let mut text = format!("{title}\n");
    for name in names {
        text.push_str(&format!("* {name}\n"));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportedSeed;
    use std::path::PathBuf;

    fn seed(table: &str, class_name: &str) -> ExportedSeed {
        ExportedSeed {
            table: table.to_string(),
            class_name: class_name.to_string(),
            path: PathBuf::from(format!("{class_name}.php")),
            rows: 1,
            pages: 1,
        }
    }

    #[test]
    fn test_print_error_statistics_no_errors() {
        print_error_statistics(&ExportStats::new());
    }

    #[test]
    fn test_print_error_statistics_with_errors() {
        let mut stats = ExportStats::new();
        stats.increment_error(ErrorType::FileConflict);
        print_error_statistics(&stats);
    }

    #[test]
    fn test_registration_text() {
        let report = RunReport {
            exported: vec![
                seed("users", "pollinate_Users"),
                seed("orders", "pollinate_Orders"),
            ],
            ..Default::default()
        };
        assert_eq!(
            registration_text(&report),
            "\nAdd this to DatabaseSeeder.php\npollinate_Users::class,\npollinate_Orders::class,\n"
        );
        assert_eq!(registration_text(&RunReport::default()), "");
    }

    #[test]
    fn test_listing_text() {
        let names = vec!["jobs".to_string(), "failed_jobs".to_string()];
        assert_eq!(
            listing_text("Ignored tables:", &names),
            "Ignored tables:\n* jobs\n* failed_jobs\n"
        );
    }
}
