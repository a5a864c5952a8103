use super::Expression;

/// Prefix operators; `-` negates a number, `not` a condition. Both attach
/// right associatively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prefix {
    Minus { expr: Expression },
    Not { expr: Expression },
}
