//! Page management for RowDB
//!
//! This module defines the fixed-size page buffer used for disk-based
//! storage. Each page is a raw 4KB block holding consecutively packed rows
//! with no per-row header; a page's identity is its zero-based index in the
//! backing file.

use super::row::ROW_SIZE;

/// Page size in bytes (4KB)
pub const PAGE_SIZE: usize = 4096;

/// Maximum number of pages a table may hold
pub const TABLE_MAX_PAGES: usize = 100;

/// Whole rows that fit in one page; the remaining bytes stay unused
pub const ROWS_PER_PAGE: usize = PAGE_SIZE / ROW_SIZE;

/// Maximum number of rows a table may hold
pub const TABLE_MAX_ROWS: usize = ROWS_PER_PAGE * TABLE_MAX_PAGES;

/// Page ID type (zero-based index into the backing file)
pub type PageId = usize;

/// A cached page buffer
#[derive(Debug, Clone)]
pub struct Page {
    /// Raw page data
    data: Vec<u8>,
    /// Is this page dirty (modified since load)?
    dirty: bool,
}

impl Page {
    /// Create a new zero-filled page
    pub fn new() -> Self {
        Self {
            data: vec![0u8; PAGE_SIZE],
            dirty: false,
        }
    }

    /// Get raw data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get mutable raw data, marking the page dirty
    pub fn data_mut(&mut self) -> &mut [u8] {
        self.dirty = true;
        &mut self.data
    }

    /// Check if page is dirty
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear dirty flag
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_starts_zeroed_and_clean() {
        let page = Page::new();
        assert!(!page.is_dirty());
        assert_eq!(page.data().len(), PAGE_SIZE);
        assert!(page.data().iter().all(|&byte| byte == 0));
    }

    #[test]
    fn test_data_mut_marks_dirty() {
        let mut page = Page::new();
        page.data_mut()[0] = 1;
        assert!(page.is_dirty());

        page.clear_dirty();
        assert!(!page.is_dirty());
    }

    #[test]
    fn test_capacity_constants() {
        assert_eq!(ROWS_PER_PAGE, 15);
        assert_eq!(TABLE_MAX_ROWS, 1500);
        // slot arithmetic relies on whole rows fitting inside one page
        assert!(ROWS_PER_PAGE * ROW_SIZE <= PAGE_SIZE);
    }
}
