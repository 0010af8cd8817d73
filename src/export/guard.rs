//! Overwrite guard: what happens to seeders that already exist.

use std::collections::HashMap;
use std::path::PathBuf;

use log::{error, info};

use crate::error_handling::ExportError;

use super::types::{ExportJob, TableFailure};

/// Drops jobs whose seeder path is already taken by an earlier job.
///
/// Table names such as `user_roles` and `userRoles` share a class name. The
/// first table keeps the seeder and each later one comes back as a
/// `NameCollision`.
pub fn split_name_collisions(jobs: Vec<ExportJob>) -> (Vec<ExportJob>, Vec<ExportError>) {
    let mut owners: HashMap<PathBuf, String> = HashMap::new();
    let mut kept = Vec::with_capacity(jobs.len());
    let mut collisions = Vec::new();

    for job in jobs {
        match owners.get(&job.path) {
            Some(first) => collisions.push(ExportError::NameCollision {
                table: job.table,
                first: first.clone(),
                path: job.path,
            }),
            None => {
                owners.insert(job.path.clone(), job.table.clone());
                kept.push(job);
            }
        }
    }

    (kept, collisions)
}

/// Jobs left to run after the guard, plus what it did to get there.
#[derive(Debug, Default)]
pub struct GuardOutcome {
    /// Jobs cleared for writing, in input order
    pub jobs: Vec<ExportJob>,
    /// Existing seeders deleted (overwrite on)
    pub deleted: Vec<PathBuf>,
    /// Tables dropped because their seeder could not be deleted (overwrite on)
    pub delete_failures: Vec<TableFailure>,
    /// Tables dropped because their seeder exists (overwrite off)
    pub blocked: Vec<ExportJob>,
}

/// Applies the overwrite policy to each job independently.
///
/// With `overwrite`, existing seeders are deleted; a job whose seeder cannot be
/// deleted is dropped and reported on its own. Without it, every job whose
/// seeder exists is dropped and all of them are reported together.
pub fn apply_overwrite_policy(jobs: Vec<ExportJob>, overwrite: bool) -> GuardOutcome {
    let mut outcome = GuardOutcome::default();

    for job in jobs {
        if !job.path.exists() {
            outcome.jobs.push(job);
            continue;
        }

        if !overwrite {
            outcome.blocked.push(job);
            continue;
        }

        match std::fs::remove_file(&job.path) {
            Ok(()) => {
                info!("deleted {}", job.path.display());
                outcome.deleted.push(job.path.clone());
                outcome.jobs.push(job);
            }
            Err(e) => {
                error!("could not delete {}: {e}", job.path.display());
                outcome.delete_failures.push(TableFailure {
                    table: job.table.clone(),
                    message: format!("could not delete {}: {e}", job.path.display()),
                });
            }
        }
    }

    if !outcome.blocked.is_empty() {
        error!("{}", conflict_message(&outcome.blocked));
        error!("You can force overwrite by passing the --overwrite option.");
    }

    outcome
}

/// One consolidated message listing every blocked seeder.
pub fn conflict_message(blocked: &[ExportJob]) -> String {
    let mut message = String::from("Cannot overwrite the following files:");
    for job in blocked {
        message.push_str(&format!("\n* {}", job.path.display()));
    }
    message
}
