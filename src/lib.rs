//! RowDB - A minimal persistent row store written in Rust
//!
//! This library provides the core components for a single-table row store:
//! - Command parsing (lexer, parser, AST)
//! - Storage engine (row codec, pages, pager, table)
//! - Statement execution
//!
//! The table has a fixed schema (an `i32` id plus a bounded text field) and
//! is manipulated through two textual commands, `INSERT <id> '<content>'`
//! and `SELECT`. Rows are persisted to a flat file of fixed-size pages
//! through a non-evicting page cache.

pub mod error;
pub mod executor;
pub mod sql;
pub mod storage;

pub use error::{Error, Result};
pub use executor::{ExecutionEngine, QueryResult};
pub use storage::{Row, Table};
