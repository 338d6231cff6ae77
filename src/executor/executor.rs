//! Statement executor for RowDB
//!
//! This module dispatches parsed statements against a table. It is also the
//! embedding boundary: `open`, `execute`, `close`.

use serde::Serialize;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::sql::{InsertStatement, Parser, Statement};
use crate::storage::{Row, Table, TABLE_MAX_ROWS};

/// Query result
#[derive(Debug, Serialize)]
pub struct QueryResult {
    /// Result rows (SELECT only), in insertion order
    pub rows: Vec<Row>,
    /// Number of affected rows (INSERT)
    pub affected_rows: usize,
    /// Message
    pub message: Option<String>,
}

impl QueryResult {
    /// Create a result carrying scanned rows
    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self {
            rows,
            affected_rows: 0,
            message: None,
        }
    }

    /// Create a result with affected rows count
    pub fn with_affected_rows(count: usize, message: impl Into<String>) -> Self {
        Self {
            rows: Vec::new(),
            affected_rows: count,
            message: Some(message.into()),
        }
    }
}

/// Execution engine: the handle an embedding drives
#[derive(Debug)]
pub struct ExecutionEngine {
    table: Table,
}

impl ExecutionEngine {
    /// Open the engine on an existing backing file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            table: Table::open(path)?,
        })
    }

    /// Parse and execute one raw command. Parse failures propagate without
    /// touching the table.
    pub fn execute(&mut self, command: &str) -> Result<QueryResult> {
        let statement = Parser::new(command)?.parse()?;
        self.execute_statement(statement)
    }

    /// Execute an already-parsed statement
    pub fn execute_statement(&mut self, statement: Statement) -> Result<QueryResult> {
        match statement {
            Statement::Insert(insert) => self.execute_insert(insert),
            Statement::Select => self.execute_select(),
        }
    }

    fn execute_insert(&mut self, statement: InsertStatement) -> Result<QueryResult> {
        if self.table.is_full() {
            return Err(Error::TableFull(self.table.num_rows()));
        }

        let row = Row::new(statement.id, statement.content);
        let index = self.table.num_rows();
        row.encode(self.table.row_bytes_mut(index)?);
        self.table.increment_row_count();

        debug!(id = row.id, slot = index, "row inserted");
        Ok(QueryResult::with_affected_rows(1, "1 row inserted"))
    }

    fn execute_select(&mut self) -> Result<QueryResult> {
        let mut rows = Vec::with_capacity(self.table.num_rows());
        for index in 0..self.table.num_rows() {
            rows.push(Row::decode(self.table.row_bytes(index)?)?);
        }

        debug!(rows = rows.len(), "select scanned table");
        Ok(QueryResult::with_rows(rows))
    }

    /// The underlying table (row count inspection)
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Flush and close the backing table. Terminal operation.
    pub fn close(self) -> Result<()> {
        self.table.close()
    }
}
