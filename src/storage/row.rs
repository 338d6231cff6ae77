//! Row type and fixed-width codec for RowDB
//!
//! A row is the one record shape this store knows: an `i32` id followed by a
//! bounded text field. On disk every row occupies exactly [`ROW_SIZE`] bytes
//! (little-endian id, then the content left-justified and zero-padded), which
//! is what makes slot arithmetic over pages valid.

use byteorder::{ByteOrder, LittleEndian};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Serialized size of the id field
pub const ID_SIZE: usize = std::mem::size_of::<i32>();
/// Maximum storable content length in bytes
pub const CONTENT_MAX: usize = 255;
/// Serialized size of the content field; one byte past the maximum so the
/// field always ends in a zero byte
pub const CONTENT_SIZE: usize = CONTENT_MAX + 1;
/// Byte offset of the id field within a row window
pub const ID_OFFSET: usize = 0;
/// Byte offset of the content field within a row window
pub const CONTENT_OFFSET: usize = ID_OFFSET + ID_SIZE;
/// Serialized size of a whole row
pub const ROW_SIZE: usize = ID_SIZE + CONTENT_SIZE;

/// A single table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Row id (duplicates are legal)
    pub id: i32,
    /// Text content, at most [`CONTENT_MAX`] bytes
    pub content: String,
}

impl Row {
    /// Create a new row
    pub fn new(id: i32, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }

    /// Serialize this row into a caller-supplied window of exactly
    /// [`ROW_SIZE`] bytes.
    ///
    /// The caller guarantees the window size and that `content` was already
    /// truncated to [`CONTENT_MAX`] bytes by the parser; the codec performs
    /// no validation of its own.
    pub fn encode(&self, buffer: &mut [u8]) {
        debug_assert_eq!(buffer.len(), ROW_SIZE);

        LittleEndian::write_i32(&mut buffer[ID_OFFSET..ID_OFFSET + ID_SIZE], self.id);

        let content_bytes = self.content.as_bytes();
        let content_field = &mut buffer[CONTENT_OFFSET..CONTENT_OFFSET + CONTENT_SIZE];
        content_field[..content_bytes.len()].copy_from_slice(content_bytes);
        content_field[content_bytes.len()..].fill(0);
    }

    /// Deserialize a row from a window of exactly [`ROW_SIZE`] bytes.
    /// Exact inverse of [`Row::encode`].
    pub fn decode(buffer: &[u8]) -> Result<Self> {
        debug_assert_eq!(buffer.len(), ROW_SIZE);

        let id = LittleEndian::read_i32(&buffer[ID_OFFSET..ID_OFFSET + ID_SIZE]);

        let content_field = &buffer[CONTENT_OFFSET..CONTENT_OFFSET + CONTENT_SIZE];
        // the field always carries at least one zero byte
        let content_len = content_field
            .iter()
            .position(|&byte| byte == 0)
            .unwrap_or(CONTENT_MAX);
        let content = std::str::from_utf8(&content_field[..content_len])
            .map_err(|e| Error::CorruptedRow(format!("content is not valid UTF-8: {}", e)))?
            .to_string();

        Ok(Self { id, content })
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.id, self.content)
    }
}
