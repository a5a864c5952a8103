use super::Expression;

/// `object.member`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberAccess {
    pub object: Expression,
    pub member: String,
}
