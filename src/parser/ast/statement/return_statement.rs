use crate::lexer::{TokenKind, Tokens};
use crate::parser::{FromTokens, ParseError};

use super::super::Expression;

/// `result [<expr>] ;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStatement {
    pub value: Option<Expression>,
}

impl FromTokens for ReturnStatement {
    fn parse(tokens: &mut Tokens) -> Result<Self, ParseError> {
        tokens.expect(TokenKind::Result, "Expected 'result'")?;

        let mut value = None;
        if !tokens.check(TokenKind::Semicolon) {
            value = Some(Expression::parse(tokens)?);
        }

        tokens.expect(TokenKind::Semicolon, "Expected ';' after return value")?;

        Ok(ReturnStatement { value })
    }
}
