use crate::lexer::{TokenKind, Tokens};
use crate::parser::{FromTokens, ParseError};

use super::VariableDeclaration;

/// `structure <name> begin { datum ... ; } end`
///
/// Fields reuse the variable declaration grammar, so an initializer on a
/// field parses fine; the emitter discards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDeclaration {
    pub name: String,
    pub fields: Vec<VariableDeclaration>,
}

impl FromTokens for StructDeclaration {
    fn parse(tokens: &mut Tokens) -> Result<Self, ParseError> {
        tokens.expect(TokenKind::Structure, "Expected 'structure'")?;

        let name = tokens
            .expect(TokenKind::Identifier, "Expected structure name")?
            .lexeme;
        tokens.expect(TokenKind::Begin, "Expected 'begin' after structure name")?;

        let mut fields = vec![];
        while !tokens.check(TokenKind::End) && !tokens.is_at_end() {
            if !tokens.check(TokenKind::Datum) {
                return Err(ParseError {
                    message: "Expected 'datum' field declaration in structure".into(),
                    line: Some(tokens.current_line()),
                });
            }
            fields.push(VariableDeclaration::parse(tokens)?);
        }

        tokens.expect(TokenKind::End, "Expected 'end' after structure fields")?;

        Ok(StructDeclaration { name, fields })
    }
}
