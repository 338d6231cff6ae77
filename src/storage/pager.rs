//! Pager for RowDB
//!
//! The pager owns the backing file and a bounded, non-evicting cache of page
//! buffers indexed by page number. Pages are loaded from disk on first
//! access and written back with an explicit byte count on flush. The cache
//! holds at most [`TABLE_MAX_PAGES`] pages, sized so the whole table fits in
//! memory; requesting a page past that bound is a caller logic error
//! surfaced as a typed error rather than a crash.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use tracing::{debug, trace};

use super::page::{Page, PageId, PAGE_SIZE, TABLE_MAX_PAGES};
use crate::error::{Error, Result};

/// Pager: file handle, recorded file length, and the page cache
#[derive(Debug)]
pub struct Pager {
    /// Open backing file
    file: File,
    /// File length in bytes, captured at open time and advanced by flushes
    file_length: u64,
    /// Page cache; entries are populated on first access and never evicted
    pages: Vec<Option<Page>>,
}

impl Pager {
    /// Open the backing file for read/write. The file must already exist:
    /// creating the storage medium is the host's responsibility.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path.as_ref())?;
        let file_length = file.metadata()?.len();

        debug!(
            path = %path.as_ref().display(),
            file_length,
            "opened backing file"
        );

        Ok(Self {
            file,
            file_length,
            pages: (0..TABLE_MAX_PAGES).map(|_| None).collect(),
        })
    }

    /// File length in bytes as currently known to the pager
    pub fn file_length(&self) -> u64 {
        self.file_length
    }

    /// Whether a page is present in the cache
    pub fn is_cached(&self, page_id: PageId) -> bool {
        self.pages
            .get(page_id)
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    /// Whether a cached page has been modified since load. Uncached pages
    /// report false.
    pub fn is_dirty(&self, page_id: PageId) -> bool {
        self.pages
            .get(page_id)
            .and_then(|slot| slot.as_ref())
            .map(|page| page.is_dirty())
            .unwrap_or(false)
    }

    /// Get a page, loading it from disk on a cache miss.
    ///
    /// A page inside the file's known extent is read from disk (a short
    /// trailing read leaves the remainder zero-filled); a page entirely
    /// beyond the extent starts as a fresh zero-filled buffer.
    pub fn get_page(&mut self, page_id: PageId) -> Result<&mut Page> {
        if page_id >= TABLE_MAX_PAGES {
            return Err(Error::PageOutOfBounds {
                requested: page_id,
                max: TABLE_MAX_PAGES,
            });
        }

        if self.pages[page_id].is_none() {
            let mut page = Page::new();
            let offset = (page_id * PAGE_SIZE) as u64;

            if offset < self.file_length {
                let available = ((self.file_length - offset) as usize).min(PAGE_SIZE);
                self.file.seek(SeekFrom::Start(offset))?;
                self.file.read_exact(&mut page.data_mut()[..available])?;
                page.clear_dirty();
                debug!(page_id, bytes = available, "page loaded from disk");
            } else {
                trace!(page_id, "fresh page beyond current file extent");
            }

            self.pages[page_id] = Some(page);
        } else {
            trace!(page_id, "page cache hit");
        }

        match self.pages[page_id].as_mut() {
            Some(page) => Ok(page),
            None => unreachable!("page was cached above"),
        }
    }

    /// Write the first `byte_count` bytes of a cached page back to disk at
    /// the page's file offset. Flushing an uncached page is a caller logic
    /// error.
    pub fn flush(&mut self, page_id: PageId, byte_count: usize) -> Result<()> {
        let page = match self.pages.get_mut(page_id).and_then(|slot| slot.as_mut()) {
            Some(page) => page,
            None => return Err(Error::PageNotCached(page_id)),
        };

        let offset = (page_id * PAGE_SIZE) as u64;
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.write_all(&page.data()[..byte_count])?;
        page.clear_dirty();

        self.file_length = self.file_length.max(offset + byte_count as u64);
        debug!(page_id, bytes = byte_count, "page flushed");
        Ok(())
    }

    /// Release every cached buffer and flush the file handle. Called by the
    /// table's close operation after dirty pages have been written back.
    pub fn close(&mut self) -> Result<()> {
        for slot in self.pages.iter_mut() {
            *slot = None;
        }
        self.file.flush()?;
        Ok(())
    }
}
