use crate::lexer::{TokenKind, Tokens};
use crate::parser::{FromTokens, ParseError};

use super::super::Expression;
use super::Block;

/// `cycle ( <cond> ) do ... conclude`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhileLoop {
    pub condition: Expression,
    pub body: Block,
}

impl FromTokens for WhileLoop {
    fn parse(tokens: &mut Tokens) -> Result<Self, ParseError> {
        tokens.expect(TokenKind::Cycle, "Expected 'cycle'")?;
        tokens.expect(TokenKind::LParen, "Expected '(' after cycle")?;
        let condition = Expression::parse(tokens)?;
        tokens.expect(TokenKind::RParen, "Expected ')' after condition")?;

        tokens.expect(TokenKind::Do, "Expected 'do' before loop body")?;
        let body = Block::parse_until(tokens, &[TokenKind::Conclude])?;
        tokens.expect(TokenKind::Conclude, "Expected 'conclude' after cycle body")?;

        Ok(WhileLoop { condition, body })
    }
}
