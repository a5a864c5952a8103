use crate::lexer::{TokenKind, Tokens};
use crate::parser::{FromTokens, ParseError};

/// A type as written in source: one of the primitive names, the parametric
/// `sequence<T>`, or the name of a user declared structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeName {
    Whole,
    Precise,
    Series,
    State,
    /// Only ever produced as the default return type of an `algorithm`
    /// without a `->` annotation.
    Void,
    Sequence(Box<TypeName>),
    Named(String),
}

impl FromTokens for TypeName {
    fn parse(tokens: &mut Tokens) -> Result<Self, ParseError> {
        if tokens.eat(TokenKind::Whole) {
            return Ok(TypeName::Whole);
        }
        if tokens.eat(TokenKind::Precise) {
            return Ok(TypeName::Precise);
        }
        if tokens.eat(TokenKind::Series) {
            return Ok(TypeName::Series);
        }
        if tokens.eat(TokenKind::State) {
            return Ok(TypeName::State);
        }
        if tokens.eat(TokenKind::Sequence) {
            tokens.expect(TokenKind::Less, "Expected '<' after sequence")?;
            let element = TypeName::parse(tokens)?;
            tokens.expect(TokenKind::Greater, "Expected '>' after sequence type")?;
            return Ok(TypeName::Sequence(Box::new(element)));
        }

        let token = tokens.expect(TokenKind::Identifier, "Expected type")?;
        Ok(TypeName::Named(token.lexeme))
    }
}
