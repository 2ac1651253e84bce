//! Service-level errors shared by the list and item workflows.

use crate::todo::{
    domain::{TodoDomainError, TodoItemId, TodoListId},
    ports::TodoRepositoryError,
};
use thiserror::Error;

/// A lookup by identifier found nothing where the operation needs an entity.
///
/// Raised before any mutation takes place.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum NotFound {
    /// The list is absent, or not visible to the caller.
    #[error("list does not exist anymore: {0}")]
    List(TodoListId),
    /// The item is absent.
    #[error("item does not exist anymore: {0}")]
    Item(TodoItemId),
}

/// Service-level errors for todo workflows.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// A required list or item does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFound),
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TodoDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
}

impl TodoServiceError {
    /// Returns `true` when the failure means a list or item is absent.
    ///
    /// Covers both the workflow's own checks and a repository write that lost
    /// a race with a concurrent delete.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Repository(err) => err.is_not_found(),
            Self::Domain(_) => false,
        }
    }
}

/// Result type for todo service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;
