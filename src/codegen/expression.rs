use crate::parser::ast::{
    ArrayAccess, ArrayLiteral, BinaryExpression, BinaryOperator, Call, Expression, Id, Literal,
    MemberAccess, Prefix,
};

use super::Codegen;

impl Codegen {
    pub(super) fn emit_expression(&self, expression: &Expression) -> String {
        match expression {
            Expression::Binary(binary) => self.emit_binary(binary),
            Expression::Prefix(prefix) => self.emit_prefix(prefix),
            Expression::Literal(literal) => emit_literal(literal),
            Expression::Id(Id { name }) => name.clone(),
            Expression::Call(call) => self.emit_call(call),
            Expression::ArrayLiteral(ArrayLiteral { elements }) => {
                format!("{{{}}}", self.emit_arguments(elements))
            }
            Expression::ArrayAccess(ArrayAccess { name, index }) => {
                format!("{name}[{}]", self.emit_expression(index))
            }
            Expression::MemberAccess(access) => {
                let MemberAccess { object, member } = access.as_ref();
                format!("{}.{member}", self.emit_expression(object))
            }
            Expression::Inquire => "inquire()".into(),
        }
    }

    /// Binary and prefix expressions are parenthesized, so the emitted C++
    /// keeps the shape of the AST no matter what the C++ precedence rules
    /// would make of the flat spelling.
    fn emit_binary(&self, binary: &BinaryExpression) -> String {
        format!(
            "({} {} {})",
            self.emit_expression(&binary.left),
            cpp_operator(binary.operator),
            self.emit_expression(&binary.right)
        )
    }

    fn emit_prefix(&self, prefix: &Prefix) -> String {
        match prefix {
            Prefix::Minus { expr } => format!("(-{})", self.emit_expression(expr)),
            Prefix::Not { expr } => format!("(!{})", self.emit_expression(expr)),
        }
    }

    fn emit_call(&self, call: &Call) -> String {
        let arguments = self.emit_arguments(&call.arguments);

        if self.structs.contains(&call.name) {
            format!("{}{{{arguments}}}", call.name)
        } else {
            format!("{}({arguments})", call.name)
        }
    }

    pub(super) fn emit_arguments(&self, arguments: &[Expression]) -> String {
        arguments
            .iter()
            .map(|argument| self.emit_expression(argument))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn emit_literal(literal: &Literal) -> String {
    match literal {
        Literal::Whole(value) => value.to_string(),
        Literal::Precise(value) => value.clone(),
        Literal::State(true) => "true".into(),
        Literal::State(false) => "false".into(),
        // Wrapped so the literal is a std::string instead of a char
        // pointer, which keeps `+` and comparisons working.
        Literal::Series(value) => format!("std::string(\"{}\")", escape_string(value)),
    }
}

/// C++ spelling of a binary operator.
fn cpp_operator(operator: BinaryOperator) -> &'static str {
    match operator {
        BinaryOperator::Or => "||",
        BinaryOperator::And => "&&",
        BinaryOperator::Greater => ">",
        BinaryOperator::Less => "<",
        BinaryOperator::Equal => "==",
        BinaryOperator::GreaterEqual => ">=",
        BinaryOperator::LessEqual => "<=",
        BinaryOperator::NotEqual => "!=",
        BinaryOperator::Plus => "+",
        BinaryOperator::Minus => "-",
        BinaryOperator::Times => "*",
        BinaryOperator::Divide => "/",
        BinaryOperator::Modulo => "%",
    }
}

/// Escape a verbatim source string so the emitted literal is well formed.
fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}
