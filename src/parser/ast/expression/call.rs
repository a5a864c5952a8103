use super::Expression;

/// A call of a named function, `name(a, b, ...)`.
///
/// Whether the name actually refers to a function or to a structure being
/// constructed is only decided during code generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub name: String,
    pub arguments: Vec<Expression>,
}
