//! Checks run before any table is exported.
//!
//! Every failure here is fatal: the run stops without touching the seeders
//! directory.

use std::path::{Path, PathBuf};

use log::debug;

use crate::config::{Config, PUBLISHED_STUB_PATH, SEED_DIRECTORIES};
use crate::error_handling::PreflightError;
use crate::export::SeederStub;
use crate::storage::TableSource;

/// Where seeders are written and the namespace they declare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedsDirectory {
    pub path: PathBuf,
    pub namespace: String,
}

/// Everything a run needs once preflight has passed.
#[derive(Debug, Clone)]
pub struct Preflight {
    pub seeds: SeedsDirectory,
    pub stub: SeederStub,
}

/// Finds the first existing `database/seeders` or `database/seeds` under `base`.
pub fn resolve_seeds_directory(base: &Path) -> Result<SeedsDirectory, PreflightError> {
    let candidates: Vec<(PathBuf, &str)> = SEED_DIRECTORIES
        .iter()
        .map(|(dir, namespace)| (base.join("database").join(dir), *namespace))
        .collect();

    candidates
        .iter()
        .find(|(path, _)| path.is_dir())
        .map(|(path, namespace)| SeedsDirectory {
            path: path.clone(),
            namespace: namespace.to_string(),
        })
        .ok_or_else(|| PreflightError::DirectoryNotFound {
            candidates: candidates.into_iter().map(|(path, _)| path).collect(),
        })
}

/// Probes the directory by creating and removing a temporary file in it.
pub fn ensure_writable(dir: &Path) -> Result<(), PreflightError> {
    let probe = tempfile::Builder::new()
        .prefix(".pollinate-")
        .tempfile_in(dir)
        .map_err(|source| PreflightError::DirectoryNotWritable {
            path: dir.to_path_buf(),
            source,
        })?;
    probe
        .close()
        .map_err(|source| PreflightError::DirectoryNotWritable {
            path: dir.to_path_buf(),
            source,
        })
}

/// Picks the seeder stub: explicit path, then the project's published stub,
/// then the built-in one.
pub fn load_stub(base: &Path, explicit: Option<&Path>) -> Result<SeederStub, PreflightError> {
    if let Some(path) = explicit {
        return SeederStub::load(path);
    }
    let published = base.join(PUBLISHED_STUB_PATH);
    if published.is_file() {
        debug!("Using published stub {}", published.display());
        return SeederStub::load(&published);
    }
    Ok(SeederStub::builtin())
}

/// Runs every check in order: directory, writability, catalog, stub.
pub async fn preflight<S: TableSource + ?Sized>(
    source: &S,
    config: &Config,
) -> Result<Preflight, PreflightError> {
    let seeds = resolve_seeds_directory(&config.base_path)?;
    ensure_writable(&seeds.path)?;

    source.check_catalog().await.map_err(|e| {
        PreflightError::EnvironmentUnsupported(format!("cannot read the table catalog: {e}"))
    })?;

    let stub = load_stub(&config.base_path, config.stub.as_deref())?;
    debug!(
        "Writing seeders to {} (namespace {})",
        seeds.path.display(),
        seeds.namespace
    );
    Ok(Preflight { seeds, stub })
}
