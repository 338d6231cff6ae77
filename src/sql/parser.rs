//! Command parser
//!
//! This module parses command tokens into a typed [`Statement`].
//!
//! Keyword matching is case-sensitive: `INSERT` and `SELECT` are the only
//! recognized command words, and lowercase spellings are rejected as
//! unrecognized commands. This is a documented constraint on callers.

use tracing::{debug, warn};

use super::ast::{InsertStatement, Statement};
use super::lexer::Lexer;
use super::token::Token;
use crate::error::{Error, Result};
use crate::storage::row::CONTENT_MAX;

/// Command parser
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    /// Create a new parser from a raw command string
    pub fn new(command: &str) -> Result<Self> {
        let mut lexer = Lexer::new(command);
        let tokens = lexer.tokenize()?;

        Ok(Self {
            tokens,
            position: 0,
        })
    }

    /// Parse a single statement, requiring the whole input to be consumed
    pub fn parse(&mut self) -> Result<Statement> {
        let statement = match self.current() {
            Token::Insert => self.parse_insert().map(Statement::Insert)?,
            Token::Select => {
                debug!("SELECT command received");
                self.advance();
                Statement::Select
            }
            other => return Err(Error::UnrecognizedCommand(other.to_string())),
        };

        if *self.current() != Token::Eof {
            return Err(Error::SyntaxError(format!(
                "unexpected trailing input '{}'",
                self.current()
            )));
        }

        Ok(statement)
    }

    fn parse_insert(&mut self) -> Result<InsertStatement> {
        debug!("INSERT command received");
        self.advance(); // INSERT

        let id = match self.current() {
            Token::IntegerLiteral(value) => i32::try_from(*value).map_err(|_| {
                Error::SyntaxError(format!("row id {} is out of range", value))
            })?,
            other => {
                return Err(Error::SyntaxError(format!(
                    "expected row id, found {}",
                    other
                )))
            }
        };
        self.advance();

        let content = match self.current() {
            Token::StringLiteral(text) => truncate_content(text.clone()),
            other => {
                return Err(Error::SyntaxError(format!(
                    "expected quoted content, found {}",
                    other
                )))
            }
        };
        self.advance();

        Ok(InsertStatement { id, content })
    }

    fn current(&self) -> &Token {
        // tokenize() always terminates the stream with Eof
        self.tokens.get(self.position).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }
}

/// Truncate content to the storable maximum during parsing. Oversized input
/// is kept, not rejected; the cut lands on the last char boundary at or
/// below [`CONTENT_MAX`] bytes.
fn truncate_content(mut content: String) -> String {
    if content.len() <= CONTENT_MAX {
        return content;
    }

    let mut end = CONTENT_MAX;
    while !content.is_char_boundary(end) {
        end -= 1;
    }
    warn!(
        original_len = content.len(),
        truncated_len = end,
        "content longer than maximum, truncating"
    );
    content.truncate(end);
    content
}
