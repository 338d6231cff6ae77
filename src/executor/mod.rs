//! Execution module
//!
//! This module contains the statement executor and the embedding-facing
//! engine handle.

pub mod executor;

pub use executor::{ExecutionEngine, QueryResult};
