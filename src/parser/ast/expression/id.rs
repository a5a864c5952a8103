/// A plain identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Id {
    pub name: String,
}
