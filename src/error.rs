//! Error types for RowDB
//!
//! This module defines all error types used throughout the row store.

use thiserror::Error;

/// The main error type for RowDB
#[derive(Error, Debug)]
pub enum Error {
    // ========== Lexer Errors ==========
    #[error("Lexer error: unexpected character '{0}' at position {1}")]
    UnexpectedCharacter(char, usize),

    #[error("Lexer error: unterminated string literal starting at position {0}")]
    UnterminatedString(usize),

    #[error("Lexer error: invalid number format at position {0}")]
    InvalidNumber(usize),

    // ========== Parser Errors ==========
    #[error("Parse error: unrecognized keyword at start of '{0}'")]
    UnrecognizedCommand(String),

    #[error("Parse error: syntax error - {0}")]
    SyntaxError(String),

    // ========== Execution Errors ==========
    #[error("Execution error: table is full ({0} rows)")]
    TableFull(usize),

    // ========== Storage Errors ==========
    #[error("Storage error: page {requested} out of bounds (max {max})")]
    PageOutOfBounds { requested: usize, max: usize },

    #[error("Storage error: page {0} is not cached")]
    PageNotCached(usize),

    #[error("Storage error: corrupted row - {0}")]
    CorruptedRow(String),

    // ========== I/O Errors ==========
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Whether the caller may retry after this error.
    ///
    /// Parse and capacity errors leave the table untouched; storage and I/O
    /// faults end the session with no partial-state guarantee.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::UnexpectedCharacter(..)
                | Error::UnterminatedString(_)
                | Error::InvalidNumber(_)
                | Error::UnrecognizedCommand(_)
                | Error::SyntaxError(_)
                | Error::TableFull(_)
        )
    }
}

/// Result type alias for RowDB operations
pub type Result<T> = std::result::Result<T, Error>;
