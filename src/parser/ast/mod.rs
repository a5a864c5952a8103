//! Internal representation of Lore programs (i.e., the AST).
mod expression;
mod statement;
mod type_name;

pub use self::expression::*;
pub use self::statement::*;
pub use self::type_name::*;

use crate::lexer::{TokenKind, Tokens};
use crate::parser::{FromTokens, ParseError};

/// AST of a single Lore program: the ordered list of top level
/// declarations.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub declarations: Vec<Declaration>,
}

impl FromTokens for Program {
    fn parse(tokens: &mut Tokens) -> Result<Self, ParseError> {
        let mut declarations = vec![];

        while !tokens.is_at_end() {
            declarations.push(Declaration::parse(tokens)?);
        }

        Ok(Program { declarations })
    }
}

/// A top level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Variable(VariableDeclaration),
    Function(FunctionDeclaration),
    Struct(StructDeclaration),
}

impl FromTokens for Declaration {
    fn parse(tokens: &mut Tokens) -> Result<Self, ParseError> {
        match tokens.peek_kind() {
            TokenKind::Datum => Ok(Declaration::Variable(VariableDeclaration::parse(tokens)?)),
            TokenKind::Algorithm => Ok(Declaration::Function(FunctionDeclaration::parse(tokens)?)),
            TokenKind::Structure => Ok(Declaration::Struct(StructDeclaration::parse(tokens)?)),
            _ => Err(ParseError {
                message: "Expected declaration (datum, algorithm, or structure)".into(),
                line: Some(tokens.current_line()),
            }),
        }
    }
}
