use crate::lexer::{TokenKind, Tokens};
use crate::parser::{FromTokens, ParseError};

use super::super::Expression;
use super::Block;

/// `verify ( <cond> ) then ... [otherwise ...] conclude`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStatement {
    pub condition: Expression,
    pub then_branch: Block,
    pub else_branch: Option<Block>,
}

impl FromTokens for IfStatement {
    fn parse(tokens: &mut Tokens) -> Result<Self, ParseError> {
        tokens.expect(TokenKind::Verify, "Expected 'verify'")?;
        tokens.expect(TokenKind::LParen, "Expected '(' after verify")?;
        let condition = Expression::parse(tokens)?;
        tokens.expect(TokenKind::RParen, "Expected ')' after condition")?;

        tokens.expect(TokenKind::Then, "Expected 'then' before true block")?;

        // `end` stops the branch early, so an unterminated verify fails on
        // the missing `conclude` instead of swallowing the enclosing block.
        let then_branch = Block::parse_until(
            tokens,
            &[TokenKind::Otherwise, TokenKind::Conclude, TokenKind::End],
        )?;

        let mut else_branch = None;
        if tokens.eat(TokenKind::Otherwise) {
            else_branch = Some(Block::parse_until(
                tokens,
                &[TokenKind::Conclude, TokenKind::End],
            )?);
        }

        tokens.expect(
            TokenKind::Conclude,
            "Expected 'conclude' at end of verify statement",
        )?;

        Ok(IfStatement {
            condition,
            then_branch,
            else_branch,
        })
    }
}
