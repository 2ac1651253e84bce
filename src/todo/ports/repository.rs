//! Repository ports for todo list and item persistence.
//!
//! Lookups report absence as `Ok(None)` or an empty `Vec`; only writes
//! against a missing row produce the `*NotFound` errors.

use crate::todo::domain::{OwnerId, TodoItem, TodoItemId, TodoList, TodoListId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Todo list persistence contract.
#[async_trait]
pub trait TodoListRepository: Send + Sync {
    /// Stores a new list and returns it as persisted.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::DuplicateList`] when the list ID already
    /// exists.
    async fn add_list(&self, list: &TodoList) -> TodoRepositoryResult<TodoList>;

    /// Finds a list by identifier.
    ///
    /// Returns `None` when the list does not exist.
    async fn find_list(&self, id: TodoListId) -> TodoRepositoryResult<Option<TodoList>>;

    /// Returns every list owned by `owner` in insertion order.
    async fn find_lists_by_owner(&self, owner: &OwnerId) -> TodoRepositoryResult<Vec<TodoList>>;

    /// Removes a list together with every item that references it.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::ListNotFound`] when the list does not
    /// exist.
    async fn delete_list(&self, id: TodoListId) -> TodoRepositoryResult<()>;
}

/// Todo item persistence contract.
#[async_trait]
pub trait TodoItemRepository: Send + Sync {
    /// Stores a new item and returns it as persisted.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::DuplicateItem`] when the item ID already
    /// exists or [`TodoRepositoryError::ListNotFound`] when the parent list is
    /// missing.
    async fn add_item(&self, item: &TodoItem) -> TodoRepositoryResult<TodoItem>;

    /// Finds an item by identifier.
    ///
    /// Returns `None` when the item does not exist.
    async fn find_item(&self, id: TodoItemId) -> TodoRepositoryResult<Option<TodoItem>>;

    /// Returns every item whose parent is `list_id`, in insertion order.
    ///
    /// An unknown list yields an empty `Vec`.
    async fn find_items_by_list(&self, list_id: TodoListId) -> TodoRepositoryResult<Vec<TodoItem>>;

    /// Persists title, body, and update timestamp of an existing item.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::ItemNotFound`] when the item does not
    /// exist.
    async fn update_item(&self, item: &TodoItem) -> TodoRepositoryResult<()>;

    /// Removes an item.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::ItemNotFound`] when the item does not
    /// exist.
    async fn delete_item(&self, id: TodoItemId) -> TodoRepositoryResult<()>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// A list with the same identifier already exists.
    #[error("duplicate todo list identifier: {0}")]
    DuplicateList(TodoListId),

    /// An item with the same identifier already exists.
    #[error("duplicate todo item identifier: {0}")]
    DuplicateItem(TodoItemId),

    /// The list was not found.
    #[error("todo list not found: {0}")]
    ListNotFound(TodoListId),

    /// The item was not found.
    #[error("todo item not found: {0}")]
    ItemNotFound(TodoItemId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Returns `true` for the list or item not-found variants.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ListNotFound(_) | Self::ItemNotFound(_))
    }
}
