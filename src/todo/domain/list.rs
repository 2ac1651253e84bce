//! Todo list aggregate and its response projection.

use super::{OwnerId, TodoListId, TodoListTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Parent entity grouping todo items under one owner.
///
/// Child items are not held here; they reference the list by
/// [`TodoListId`] and are fetched explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    id: TodoListId,
    owner: OwnerId,
    title: TodoListTitle,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted todo list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoListData {
    /// Persisted list identifier.
    pub id: TodoListId,
    /// Persisted owner identity.
    pub owner: OwnerId,
    /// Persisted title.
    pub title: TodoListTitle,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TodoList {
    /// Creates a new list owned by `owner`.
    #[must_use]
    pub fn new(owner: OwnerId, title: TodoListTitle, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TodoListId::new(),
            owner,
            title,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a list from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoListData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            title: data.title,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the list identifier.
    #[must_use]
    pub const fn id(&self) -> TodoListId {
        self.id
    }

    /// Returns the owner identity.
    #[must_use]
    pub const fn owner(&self) -> &OwnerId {
        &self.owner
    }

    /// Returns the list title.
    #[must_use]
    pub const fn title(&self) -> &TodoListTitle {
        &self.title
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when `caller` owns this list.
    #[must_use]
    pub fn is_owned_by(&self, caller: &OwnerId) -> bool {
        self.owner == *caller
    }
}

/// Response shape for a todo list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoListView {
    /// List identifier.
    pub id: TodoListId,
    /// List title.
    pub title: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&TodoList> for TodoListView {
    fn from(list: &TodoList) -> Self {
        Self {
            id: list.id(),
            title: list.title().as_str().to_owned(),
            created_at: list.created_at(),
            updated_at: list.updated_at(),
        }
    }
}
