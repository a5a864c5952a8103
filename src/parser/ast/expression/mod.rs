mod array;
mod binary;
mod call;
mod id;
mod literal;
mod member_access;
mod prefix;

pub use self::array::*;
pub use self::binary::*;
pub use self::call::*;
pub use self::id::*;
pub use self::literal::*;
pub use self::member_access::*;
pub use self::prefix::*;

use crate::lexer::{TokenKind, Tokens};
use crate::parser::{FromTokens, ParseError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Binary(Box<BinaryExpression>),
    Prefix(Box<Prefix>),
    Literal(Literal),
    Id(Id),
    Call(Call),
    ArrayLiteral(ArrayLiteral),
    ArrayAccess(ArrayAccess),
    MemberAccess(Box<MemberAccess>),
    /// The read-one-line intrinsic, `inquire()`.
    Inquire,
}

impl FromTokens for Expression {
    fn parse(tokens: &mut Tokens) -> Result<Self, ParseError> {
        Self::parse_logical_or(tokens)
    }
}

/// The precedence ladder. Every level parses its operands one level down,
/// so `or` binds loosest and postfix chains bind tightest; all binary
/// operators are left associative.
impl Expression {
    fn parse_logical_or(tokens: &mut Tokens) -> Result<Self, ParseError> {
        let mut expr = Self::parse_logical_and(tokens)?;

        while tokens.eat(TokenKind::Or) {
            let right = Self::parse_logical_and(tokens)?;
            expr = Self::binary(expr, BinaryOperator::Or, right);
        }

        Ok(expr)
    }

    fn parse_logical_and(tokens: &mut Tokens) -> Result<Self, ParseError> {
        let mut expr = Self::parse_comparison(tokens)?;

        while tokens.eat(TokenKind::And) {
            let right = Self::parse_comparison(tokens)?;
            expr = Self::binary(expr, BinaryOperator::And, right);
        }

        Ok(expr)
    }

    fn parse_comparison(tokens: &mut Tokens) -> Result<Self, ParseError> {
        let mut expr = Self::parse_additive(tokens)?;

        loop {
            let operator = match tokens.peek_kind() {
                TokenKind::Greater => BinaryOperator::Greater,
                TokenKind::Less => BinaryOperator::Less,
                TokenKind::Equal => BinaryOperator::Equal,
                TokenKind::GreaterEqual => BinaryOperator::GreaterEqual,
                TokenKind::LessEqual => BinaryOperator::LessEqual,
                TokenKind::NotEqual => BinaryOperator::NotEqual,
                _ => break,
            };
            tokens.next();

            let right = Self::parse_additive(tokens)?;
            expr = Self::binary(expr, operator, right);
        }

        Ok(expr)
    }

    fn parse_additive(tokens: &mut Tokens) -> Result<Self, ParseError> {
        let mut expr = Self::parse_multiplicative(tokens)?;

        loop {
            let operator = match tokens.peek_kind() {
                TokenKind::Plus => BinaryOperator::Plus,
                TokenKind::Minus => BinaryOperator::Minus,
                _ => break,
            };
            tokens.next();

            let right = Self::parse_multiplicative(tokens)?;
            expr = Self::binary(expr, operator, right);
        }

        Ok(expr)
    }

    fn parse_multiplicative(tokens: &mut Tokens) -> Result<Self, ParseError> {
        let mut expr = Self::parse_unary(tokens)?;

        loop {
            let operator = match tokens.peek_kind() {
                TokenKind::Star => BinaryOperator::Times,
                TokenKind::Slash => BinaryOperator::Divide,
                TokenKind::Percent => BinaryOperator::Modulo,
                _ => break,
            };
            tokens.next();

            let right = Self::parse_unary(tokens)?;
            expr = Self::binary(expr, operator, right);
        }

        Ok(expr)
    }

    fn parse_unary(tokens: &mut Tokens) -> Result<Self, ParseError> {
        if tokens.eat(TokenKind::Not) {
            let expr = Self::parse_unary(tokens)?;
            return Ok(Expression::Prefix(Box::new(Prefix::Not { expr })));
        }

        if tokens.eat(TokenKind::Minus) {
            let expr = Self::parse_unary(tokens)?;
            return Ok(Expression::Prefix(Box::new(Prefix::Minus { expr })));
        }

        Self::parse_primary(tokens)
    }

    fn parse_primary(tokens: &mut Tokens) -> Result<Self, ParseError> {
        let mut expr = match tokens.peek_kind() {
            TokenKind::Inquire => {
                tokens.next();
                tokens.expect(TokenKind::LParen, "Expected '(' after inquire")?;
                tokens.expect(TokenKind::RParen, "Expected ')' after inquire")?;
                Expression::Inquire
            }
            TokenKind::LBracket => {
                tokens.next();

                let mut elements = vec![];
                if !tokens.check(TokenKind::RBracket) {
                    loop {
                        elements.push(Expression::parse(tokens)?);
                        if !tokens.eat(TokenKind::Comma) {
                            break;
                        }
                    }
                }
                tokens.expect(TokenKind::RBracket, "Expected ']' after array literal")?;

                Expression::ArrayLiteral(ArrayLiteral { elements })
            }
            TokenKind::IntegerLiteral => {
                let token = tokens.expect(TokenKind::IntegerLiteral, "Expected integer literal")?;
                let value = token.lexeme.parse::<i64>().map_err(|_| ParseError {
                    message: format!("Invalid integer literal '{}'", token.lexeme),
                    line: Some(token.line),
                })?;
                Expression::Literal(Literal::Whole(value))
            }
            TokenKind::FloatLiteral => {
                let token = tokens.expect(TokenKind::FloatLiteral, "Expected float literal")?;
                Expression::Literal(Literal::Precise(token.lexeme))
            }
            TokenKind::StringLiteral => {
                let token = tokens.expect(TokenKind::StringLiteral, "Expected string literal")?;
                Expression::Literal(Literal::Series(token.lexeme))
            }
            TokenKind::BooleanLiteral => {
                let token = tokens.expect(TokenKind::BooleanLiteral, "Expected boolean literal")?;
                Expression::Literal(Literal::State(token.lexeme == "true"))
            }
            TokenKind::Identifier => {
                let name = tokens
                    .expect(TokenKind::Identifier, "Expected identifier")?
                    .lexeme;

                if tokens.eat(TokenKind::LParen) {
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

                    Expression::Call(Call { name, arguments })
                } else if tokens.eat(TokenKind::LBracket) {
                    let index = Expression::parse(tokens)?;
                    tokens.expect(TokenKind::RBracket, "Expected ']' after array index")?;

                    Expression::ArrayAccess(ArrayAccess {
                        name,
                        index: Box::new(index),
                    })
                } else {
                    Expression::Id(Id { name })
                }
            }
            TokenKind::LParen => {
                tokens.next();
                let expr = Expression::parse(tokens)?;
                tokens.expect(TokenKind::RParen, "Expected ')' after expression")?;
                expr
            }
            other => {
                return Err(ParseError {
                    message: format!("Unexpected token {other:?}"),
                    line: Some(tokens.current_line()),
                })
            }
        };

        // Postfix chain. `.member` keeps extending the expression;
        // `[index]` on anything but a plain name is consumed here but never
        // bound, since ArrayAccess only carries a name.
        loop {
            if tokens.eat(TokenKind::Dot) {
                let member = tokens
                    .expect(TokenKind::Identifier, "Expected member name after '.'")?
                    .lexeme;
                expr = Expression::MemberAccess(Box::new(MemberAccess { object: expr, member }));
            } else if tokens.eat(TokenKind::LBracket) {
                Expression::parse(tokens)?;
                tokens.expect(TokenKind::RBracket, "Expected ']' after array index")?;
                break;
            } else {
                break;
            }
        }

        Ok(expr)
    }

    fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Expression {
        Expression::Binary(Box::new(BinaryExpression {
            left,
            operator,
            right,
        }))
    }
}
