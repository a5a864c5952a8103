use crate::lexer::{TokenKind, Tokens};
use crate::parser::{FromTokens, ParseError};

use super::super::TypeName;
use super::Block;

/// `algorithm <name> ( params ) [-> <type>] ( ; | begin ... end )`
///
/// A trailing `;` instead of a body makes this a forward declaration; an
/// omitted return annotation defaults to `void`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclaration {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: TypeName,
    pub body: Option<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub type_name: TypeName,
}

impl FromTokens for FunctionDeclaration {
    fn parse(tokens: &mut Tokens) -> Result<Self, ParseError> {
        tokens.expect(TokenKind::Algorithm, "Expected 'algorithm'")?;

        let name = tokens
            .expect(TokenKind::Identifier, "Expected function name")?
            .lexeme;
        tokens.expect(TokenKind::LParen, "Expected '(' after function name")?;

        let mut parameters = vec![];
        if !tokens.check(TokenKind::RParen) {
            loop {
                let param_name = tokens
                    .expect(TokenKind::Identifier, "Expected parameter name")?
                    .lexeme;
                tokens.expect(TokenKind::Colon, "Expected ':' after parameter name")?;
                let type_name = TypeName::parse(tokens)?;

                parameters.push(Parameter {
                    name: param_name,
                    type_name,
                });

                if !tokens.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        tokens.expect(TokenKind::RParen, "Expected ')' after parameters")?;

        let mut return_type = TypeName::Void;
        if tokens.eat(TokenKind::Arrow) {
            return_type = TypeName::parse(tokens)?;
        }

        if tokens.eat(TokenKind::Semicolon) {
            return Ok(FunctionDeclaration {
                name,
                parameters,
                return_type,
                body: None,
            });
        }

        tokens.expect(TokenKind::Begin, "Expected 'begin' before function body")?;
        let body = Block::parse_until(tokens, &[TokenKind::End])?;
        tokens.expect(TokenKind::End, "Expected 'end' after block")?;

        Ok(FunctionDeclaration {
            name,
            parameters,
            return_type,
            body: Some(body),
        })
    }
}
