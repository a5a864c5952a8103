use crate::lexer::{TokenKind, Tokens};
use crate::parser::{FromTokens, ParseError};

use super::super::{Expression, TypeName};

/// `datum <name> : <type> [= <expr>] ;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclaration {
    pub name: String,
    pub type_name: TypeName,
    pub initializer: Option<Expression>,
}

impl FromTokens for VariableDeclaration {
    fn parse(tokens: &mut Tokens) -> Result<Self, ParseError> {
        tokens.expect(TokenKind::Datum, "Expected 'datum'")?;

        let name = tokens
            .expect(TokenKind::Identifier, "Expected variable name")?
            .lexeme;
        tokens.expect(TokenKind::Colon, "Expected ':' after variable name")?;
        let type_name = TypeName::parse(tokens)?;

        let mut initializer = None;
        if tokens.eat(TokenKind::Assign) {
            initializer = Some(Expression::parse(tokens)?);
        }

        tokens.expect(
            TokenKind::Semicolon,
            "Expected ';' after variable declaration",
        )?;

        Ok(VariableDeclaration {
            name,
            type_name,
            initializer,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::parser::ast::{Call, Literal};

    use super::*;

    fn parse(input: &str) -> Result<VariableDeclaration, ParseError> {
        let mut tokens = Lexer::new(input).lex().expect("should lex").into();
        VariableDeclaration::parse(&mut tokens)
    }

    #[test]
    fn test_parse_with_initializer() {
        assert_eq!(
            Ok(VariableDeclaration {
                name: "x".into(),
                type_name: TypeName::Whole,
                initializer: Some(Expression::Literal(Literal::Whole(5))),
            }),
            parse("datum x: whole = 5;")
        );
    }

    #[test]
    fn test_parse_without_initializer() {
        assert_eq!(
            Ok(VariableDeclaration {
                name: "name".into(),
                type_name: TypeName::Series,
                initializer: None,
            }),
            parse("datum name: series;")
        );
    }

    #[test]
    fn test_parse_sequence_typed() {
        assert_eq!(
            Ok(VariableDeclaration {
                name: "xs".into(),
                type_name: TypeName::Sequence(Box::new(TypeName::Whole)),
                initializer: None,
            }),
            parse("datum xs: sequence<whole>;")
        );
    }

    #[test]
    fn test_initializer_may_be_a_call() {
        assert_eq!(
            Ok(VariableDeclaration {
                name: "p".into(),
                type_name: TypeName::Named("Point".into()),
                initializer: Some(Expression::Call(Call {
                    name: "Point".into(),
                    arguments: vec![
                        Expression::Literal(Literal::Whole(3)),
                        Expression::Literal(Literal::Whole(4)),
                    ],
                })),
            }),
            parse("datum p: Point = Point(3, 4);")
        );
    }

    #[test]
    fn test_missing_colon_is_an_error() {
        let error = parse("datum x whole;").expect_err("should not parse");

        assert_eq!(
            "Expected ':' after variable name at line 1",
            error.to_string()
        );
    }

    #[test]
    fn test_missing_semicolon_is_an_error() {
        let error = parse("datum x: whole = 5").expect_err("should not parse");

        assert!(error
            .to_string()
            .contains("Expected ';' after variable declaration"));
    }
}
