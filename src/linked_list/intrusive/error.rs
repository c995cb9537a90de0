use thiserror::Error;

/// Errors reported by the checked list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinkError {
    /// Inserting would overwrite the links of a list the element is already in.
    #[error("element is already linked into a list")]
    AlreadyLinked,

    /// Removing needs neighbors, and the element has none.
    #[error("element is not linked into any list")]
    NotLinked,
}
