//! Recursive descent parser for Lore programs.
pub mod ast;

use std::{error::Error, fmt::Display};

use crate::lexer::{Token, TokenKind, Tokens};

use self::ast::Program;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub line: Option<usize>,
}

impl ParseError {
    pub fn eof(item: &str) -> ParseError {
        ParseError {
            message: format!("hit EOF while parsing {item}"),
            line: None,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(line) = self.line {
            f.write_fmt(format_args!("{} at line {line}", self.message))
        } else {
            f.write_str(&self.message)
        }
    }
}

impl Error for ParseError {}

/// Implementors can be parsed from the front of a token stream.
pub trait FromTokens: Sized {
    fn parse(tokens: &mut Tokens) -> Result<Self, ParseError>;
}

/// Parse a whole program. The first violation of the grammar aborts the
/// parse with an error naming the offending line.
pub fn parse(tokens: &mut Tokens) -> Result<Program, ParseError> {
    Program::parse(tokens)
}

/// Grammar-facing helpers on the token stream.
impl Tokens {
    /// Check whether the current token has the given kind.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Consume the current token iff it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.next();
            return true;
        }
        false
    }

    /// Consume a token of the given kind, or fail with `message`.
    pub fn expect(&mut self, kind: TokenKind, message: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            return self.next().ok_or_else(|| ParseError::eof(message));
        }

        Err(ParseError {
            message: message.into(),
            line: Some(self.current_line()),
        })
    }
}
