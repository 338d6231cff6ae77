//! Table storage for RowDB
//!
//! A table owns exactly one pager and an in-memory row count. The count is
//! derived from the file length once, at open time, and is the sole source
//! of truth afterwards: together with the fixed row size it determines every
//! row's page and byte offset.

use std::path::Path;

use tracing::{info, warn};

use super::page::{PageId, PAGE_SIZE, ROWS_PER_PAGE, TABLE_MAX_ROWS};
use super::pager::Pager;
use super::row::ROW_SIZE;
use crate::error::Result;

/// The (page index, byte offset) address of one logical row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSlot {
    pub page_id: PageId,
    pub byte_offset: usize,
}

/// The logical dataset: row count plus a pager
#[derive(Debug)]
pub struct Table {
    pager: Pager,
    num_rows: usize,
}

impl Table {
    /// Open a table on an existing backing file and derive its row count
    /// from the file length.
    ///
    /// Full pages each hold [`ROWS_PER_PAGE`] rows regardless of their slack
    /// bytes; only the trailing partial page is divided by [`ROW_SIZE`].
    /// Trailing partial-row bytes are discarded, matching the reference
    /// behavior for files left inconsistent by an interrupted write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let pager = Pager::open(path)?;
        let file_length = pager.file_length() as usize;

        let full_pages = file_length / PAGE_SIZE;
        let trailing_bytes = file_length % PAGE_SIZE;
        let mut num_rows = full_pages * ROWS_PER_PAGE + trailing_bytes / ROW_SIZE;

        if trailing_bytes % ROW_SIZE != 0 {
            warn!(
                file_length,
                partial_bytes = trailing_bytes % ROW_SIZE,
                "backing file ends mid-row; trailing partial row discarded"
            );
        }
        if num_rows > TABLE_MAX_ROWS {
            warn!(
                num_rows,
                max = TABLE_MAX_ROWS,
                "backing file larger than table capacity; extra rows ignored"
            );
            num_rows = TABLE_MAX_ROWS;
        }

        info!(num_rows, "table opened");
        Ok(Self { pager, num_rows })
    }

    /// Number of rows currently in the table
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Whether the table has reached its row capacity
    pub fn is_full(&self) -> bool {
        self.num_rows >= TABLE_MAX_ROWS
    }

    /// Record that a row was appended at slot `num_rows`
    pub fn increment_row_count(&mut self) {
        self.num_rows += 1;
    }

    /// Pure slot arithmetic: where row `row_index` lives
    pub fn row_slot(row_index: usize) -> RowSlot {
        RowSlot {
            page_id: row_index / ROWS_PER_PAGE,
            byte_offset: (row_index % ROWS_PER_PAGE) * ROW_SIZE,
        }
    }

    /// Borrow the `ROW_SIZE` window holding row `row_index`, loading its
    /// page on demand
    pub fn row_bytes(&mut self, row_index: usize) -> Result<&[u8]> {
        let slot = Self::row_slot(row_index);
        let page = self.pager.get_page(slot.page_id)?;
        Ok(&page.data()[slot.byte_offset..slot.byte_offset + ROW_SIZE])
    }

    /// Mutably borrow the `ROW_SIZE` window holding row `row_index`,
    /// marking its page dirty
    pub fn row_bytes_mut(&mut self, row_index: usize) -> Result<&mut [u8]> {
        let slot = Self::row_slot(row_index);
        let page = self.pager.get_page(slot.page_id)?;
        Ok(&mut page.data_mut()[slot.byte_offset..slot.byte_offset + ROW_SIZE])
    }

    /// Flush every dirty page back to disk and close the backing file.
    ///
    /// Full pages are written whole; the trailing partial page is written
    /// only up to its occupied byte count so the file length stays an exact
    /// record of the row count. Pages never cached were never read or
    /// written and are skipped. Terminal operation: the table is consumed.
    pub fn close(mut self) -> Result<()> {
        let full_pages = self.num_rows / ROWS_PER_PAGE;
        for page_id in 0..full_pages {
            if self.pager.is_dirty(page_id) {
                self.pager.flush(page_id, PAGE_SIZE)?;
            }
        }

        let trailing_rows = self.num_rows % ROWS_PER_PAGE;
        if trailing_rows > 0 && self.pager.is_dirty(full_pages) {
            self.pager.flush(full_pages, trailing_rows * ROW_SIZE)?;
        }

        self.pager.close()?;
        info!(num_rows = self.num_rows, "table closed");
        Ok(())
    }
}
