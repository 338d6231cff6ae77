//! Statement AST
//!
//! This module defines the typed form of a parsed command.

/// A parsed command
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// INSERT a single row
    Insert(InsertStatement),
    /// SELECT every row in insertion order
    Select,
}

/// INSERT statement: `INSERT <id> '<content>'`
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    /// Row id (no uniqueness constraint; duplicates are legal)
    pub id: i32,
    /// Row content, already truncated to the storable maximum
    pub content: String,
}
