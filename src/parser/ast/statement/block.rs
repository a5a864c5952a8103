use crate::lexer::{TokenKind, Tokens};
use crate::parser::{FromTokens, ParseError};

use super::Statement;

/// An ordered sequence of statements.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub statements: Vec<Statement>,
}

impl Block {
    /// Read statements until one of the `stop` keywords (or end-of-file)
    /// comes up. The stop token itself is left for the caller to consume,
    /// since it belongs to the surrounding construct.
    pub fn parse_until(tokens: &mut Tokens, stop: &[TokenKind]) -> Result<Self, ParseError> {
        let mut statements = vec![];

        while !tokens.is_at_end() && !stop.contains(&tokens.peek_kind()) {
            statements.push(Statement::parse(tokens)?);
        }

        Ok(Block { statements })
    }
}
