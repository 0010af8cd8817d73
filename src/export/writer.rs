//! Seeder file writing.
//!
//! A seeder is streamed page by page into its file. Any failure removes the
//! file, so a seeder on disk is always complete.

use std::fs::OpenOptions;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use std::pin::pin;

use futures::TryStreamExt;
use log::{info, warn};

use crate::error_handling::ExportError;
use crate::storage::TableSource;

use super::format::format_rows;
use super::pager::RowPager;
use super::template::{
    insert_block_foot, insert_block_head, seeder_foot, seeder_head, SeedMetadata, SeederStub,
};
use super::types::{ExportJob, ExportedSeed};

/// Settings shared by every seeder of a run.
#[derive(Debug, Clone, Copy)]
pub struct WriteContext<'a> {
    pub stub: &'a SeederStub,
    /// PHP namespace of the seeders directory
    pub namespace: &'a str,
    pub metadata: &'a SeedMetadata,
    pub page_size: u32,
}

/// Writes the seeder for `job`, appending to a newly created `job.path`.
///
/// A file already at `job.path` is never opened, so it can be neither
/// extended nor removed here.
///
/// # Errors
///
/// `TableUnavailable` or `RowDecodeFailed` if the table cannot be read,
/// `WriteFailed` on I/O errors, including an existing file at `job.path`.
/// Only a file created by this call is removed on failure.
pub async fn write_seed<S: TableSource + ?Sized>(
    source: &S,
    job: &ExportJob,
    ctx: &WriteContext<'_>,
) -> Result<ExportedSeed, ExportError> {
    let file = OpenOptions::new()
        .create_new(true)
        .append(true)
        .open(&job.path)
        .map_err(|source| ExportError::WriteFailed {
            path: job.path.clone(),
            source,
        })?;
    let mut out = BufWriter::new(file);

    match write_contents(source, job, ctx, &mut out).await {
        Ok((rows, pages)) => {
            info!("Seeded table '{}'", job.table);
            Ok(ExportedSeed {
                table: job.table.clone(),
                class_name: job.class_name.clone(),
                path: job.path.clone(),
                rows,
                pages,
            })
        }
        Err(e) => {
            // Discard buffered bytes instead of flushing them on drop
            drop(out.into_parts());
            discard_partial(&job.path);
            Err(e)
        }
    }
}

async fn write_contents<S: TableSource + ?Sized, W: Write>(
    source: &S,
    job: &ExportJob,
    ctx: &WriteContext<'_>,
    out: &mut W,
) -> Result<(u64, u64), ExportError> {
    let head = seeder_head(
        ctx.stub,
        ctx.namespace,
        &job.class_name,
        &job.table,
        ctx.metadata,
    );
    put(out, &job.path, &head)?;

    let mut rows = 0u64;
    let mut pages_written = 0u64;
    let mut pages = pin!(RowPager::new(source, &job.table, ctx.page_size).into_stream());
    while let Some(page) = pages.try_next().await? {
        if page.is_empty() {
            continue;
        }
        let block = format!(
            "{}{}{}",
            insert_block_head(&job.table),
            format_rows(&page.rows),
            insert_block_foot()
        );
        put(out, &job.path, &block)?;
        rows += page.len() as u64;
        pages_written += 1;
    }

    put(out, &job.path, &seeder_foot(ctx.stub))?;
    out.flush().map_err(|source| ExportError::WriteFailed {
        path: job.path.clone(),
        source,
    })?;
    Ok((rows, pages_written))
}

fn put<W: Write>(out: &mut W, path: &Path, text: &str) -> Result<(), ExportError> {
    out.write_all(text.as_bytes())
        .map_err(|source| ExportError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
}

fn discard_partial(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to remove partial seed file {}: {e}", path.display()),
    }
}
