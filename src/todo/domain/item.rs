//! Todo item entity and its response projection.

use super::{OwnerId, TodoItemId, TodoItemTitle, TodoListId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Child entity belonging to exactly one todo list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    id: TodoItemId,
    list_id: TodoListId,
    owner: OwnerId,
    title: TodoItemTitle,
    body: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted todo item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoItemData {
    /// Persisted item identifier.
    pub id: TodoItemId,
    /// Persisted parent list reference.
    pub list_id: TodoListId,
    /// Persisted owner identity.
    pub owner: OwnerId,
    /// Persisted title.
    pub title: TodoItemTitle,
    /// Persisted body, if any.
    pub body: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TodoItem {
    /// Creates a new item in `list_id` owned by `owner`.
    #[must_use]
    pub fn new(
        list_id: TodoListId,
        owner: OwnerId,
        title: TodoItemTitle,
        body: Option<String>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TodoItemId::new(),
            list_id,
            owner,
            title,
            body,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs an item from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoItemData) -> Self {
        Self {
            id: data.id,
            list_id: data.list_id,
            owner: data.owner,
            title: data.title,
            body: data.body,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> TodoItemId {
        self.id
    }

    /// Returns the parent list reference.
    #[must_use]
    pub const fn list_id(&self) -> TodoListId {
        self.list_id
    }

    /// Returns the owner identity.
    #[must_use]
    pub const fn owner(&self) -> &OwnerId {
        &self.owner
    }

    /// Returns the item title.
    #[must_use]
    pub const fn title(&self) -> &TodoItemTitle {
        &self.title
    }

    /// Returns the item body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
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

    /// Overwrites title and body.
    ///
    /// Identifier, parent reference, owner, and creation time are untouched.
    pub fn revise(&mut self, title: TodoItemTitle, body: Option<String>, clock: &impl Clock) {
        self.title = title;
        self.body = body;
        self.updated_at = clock.utc();
    }

    /// Copies the revisable fields (title, body, update time) from `source`.
    pub(crate) fn apply_revision_from(&mut self, source: &Self) {
        self.title = source.title.clone();
        self.body = source.body.clone();
        self.updated_at = source.updated_at;
    }
}

/// Response shape for a todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemView {
    /// Item identifier.
    pub id: TodoItemId,
    /// Parent list identifier.
    pub list_id: TodoListId,
    /// Item title.
    pub title: String,
    /// Item body, if any.
    pub body: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&TodoItem> for TodoItemView {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: item.id(),
            list_id: item.list_id(),
            title: item.title().as_str().to_owned(),
            body: item.body().map(str::to_owned),
            created_at: item.created_at(),
            updated_at: item.updated_at(),
        }
    }
}
