use thiserror::Error;

/// Errors raised while building a [`ColumnPredicate`](super::ColumnPredicate).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PredicateError {
    /// The target column identifier was empty.
    #[error("target column must not be empty")]
    EmptyColumn,
}
