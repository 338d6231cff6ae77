//! Command parsing module
//!
//! This module contains the command-processing front end:
//! - Lexer (tokenizer)
//! - Parser
//! - AST definitions

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{InsertStatement, Statement};
pub use lexer::Lexer;
pub use parser::Parser;
pub use token::Token;
