//! Limit/offset pagination over one table.

use futures::stream::{self, Stream};

use crate::error_handling::{DatabaseError, ExportError};
use crate::models::Page;
use crate::storage::TableSource;

/// Lazy, finite, non-restartable sequence of pages of one table.
///
/// Page `n` is selected with limit = page size and offset = `n` × page size.
/// The pager is exhausted after an empty page, after a page shorter than the
/// page size, or after the first failed fetch.
pub struct RowPager<'a, S: TableSource + ?Sized> {
    source: &'a S,
    table: &'a str,
    page_size: u32,
    next_index: u64,
    finished: bool,
}

impl<'a, S: TableSource + ?Sized> RowPager<'a, S> {
    pub fn new(source: &'a S, table: &'a str, page_size: u32) -> Self {
        Self {
            source,
            table,
            page_size: page_size.max(1),
            next_index: 0,
            finished: false,
        }
    }

    /// Fetches the next page, or `None` once the table is exhausted.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::TableUnavailable` if the select fails and
    /// `ExportError::RowDecodeFailed` if a selected value cannot be read. The
    /// pager yields nothing afterwards.
    pub async fn next_page(&mut self) -> Result<Option<Page>, ExportError> {
        if self.finished {
            return Ok(None);
        }

        let offset = self.next_index * u64::from(self.page_size);
        let rows = match self
            .source
            .fetch_page(self.table, self.page_size, offset)
            .await
        {
            Ok(rows) => rows,
            Err(source) => {
                self.finished = true;
                let table = self.table.to_string();
                return Err(match source {
                    DatabaseError::DecodeError(_) => ExportError::RowDecodeFailed { table, source },
                    _ => ExportError::TableUnavailable { table, source },
                });
            }
        };

        if rows.is_empty() {
            self.finished = true;
            return Ok(None);
        }
        if rows.len() < self.page_size as usize {
            self.finished = true;
        }

        let page = Page {
            index: self.next_index,
            rows,
        };
        self.next_index += 1;
        log::debug!(
            "Fetched page {} of '{}' ({} rows)",
            page.index,
            self.table,
            page.len()
        );
        Ok(Some(page))
    }

    /// The remaining pages as a stream.
    pub fn into_stream(self) -> impl Stream<Item = Result<Page, ExportError>> + 'a {
        stream::try_unfold(self, |mut pager| async move {
            Ok(pager.next_page().await?.map(|page| (page, pager)))
        })
    }
}
