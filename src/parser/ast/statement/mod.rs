mod assignment;
mod block;
mod function;
mod if_statement;
mod return_statement;
mod struct_declaration;
mod variable_declaration;
mod while_loop;

pub use self::assignment::*;
pub use self::block::*;
pub use self::function::*;
pub use self::if_statement::*;
pub use self::return_statement::*;
pub use self::struct_declaration::*;
pub use self::variable_declaration::*;
pub use self::while_loop::*;

use crate::lexer::{TokenKind, Tokens};
use crate::parser::{FromTokens, ParseError};

use super::{Call, Expression};

/// A statement inside a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    VariableDeclaration(VariableDeclaration),
    If(IfStatement),
    WhileLoop(WhileLoop),
    Return(ReturnStatement),
    Assignment(Assignment),
    Expression(Expression),
}

impl FromTokens for Statement {
    fn parse(tokens: &mut Tokens) -> Result<Self, ParseError> {
        match tokens.peek_kind() {
            TokenKind::Verify => Ok(Statement::If(IfStatement::parse(tokens)?)),
            TokenKind::Cycle => Ok(Statement::WhileLoop(WhileLoop::parse(tokens)?)),
            TokenKind::Result => Ok(Statement::Return(ReturnStatement::parse(tokens)?)),
            TokenKind::Datum => Ok(Statement::VariableDeclaration(VariableDeclaration::parse(
                tokens,
            )?)),
            TokenKind::Reveal => Self::parse_reveal(tokens),
            _ => Self::parse_assignment_or_expression(tokens),
        }
    }
}

impl Statement {
    /// `reveal(args...);` desugars into a plain call of the runtime
    /// printer, so it needs no statement variant of its own.
    fn parse_reveal(tokens: &mut Tokens) -> Result<Self, ParseError> {
        tokens.expect(TokenKind::Reveal, "Expected 'reveal'")?;
        tokens.expect(TokenKind::LParen, "Expected '(' after reveal")?;

        let mut arguments = vec![];
        if !tokens.check(TokenKind::RParen) {
            loop {
                arguments.push(Expression::parse(tokens)?);
                if !tokens.eat(TokenKind::Comma) {
                    break;
                }
            }
        }

        tokens.expect(TokenKind::RParen, "Expected ')' after arguments")?;
        tokens.expect(TokenKind::Semicolon, "Expected ';' after reveal statement")?;

        Ok(Statement::Expression(Expression::Call(Call {
            name: "reveal".into(),
            arguments,
        })))
    }

    /// Parse an expression; a following `=` turns it into an assignment,
    /// provided the expression is a valid target.
    fn parse_assignment_or_expression(tokens: &mut Tokens) -> Result<Self, ParseError> {
        let expr = Expression::parse(tokens)?;

        if tokens.eat(TokenKind::Assign) {
            let value = Expression::parse(tokens)?;
            tokens.expect(TokenKind::Semicolon, "Expected ';' after assignment")?;

            let target = AssignTarget::from_expression(expr, tokens.current_line())?;
            return Ok(Statement::Assignment(Assignment { target, value }));
        }

        tokens.expect(TokenKind::Semicolon, "Expected ';' after expression")?;
        Ok(Statement::Expression(expr))
    }
}
