/// A literal value, tagged with the primitive type it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Whole(i64),
    /// Float literals keep their source spelling so they are emitted
    /// exactly as written.
    Precise(String),
    Series(String),
    State(bool),
}
