//! Service layer for todo item creation, revision, deletion, and listing.
//!
//! Every write re-checks its parent list before touching the item, and the
//! first failed check aborts the operation with [`NotFound`].

use super::error::{NotFound, TodoServiceResult};
use crate::todo::{
    domain::{OwnerId, TodoItem, TodoItemId, TodoItemTitle, TodoItemView, TodoList, TodoListId},
    ports::{TodoItemRepository, TodoListRepository},
};
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Request payload for creating a todo item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoItemRequest {
    list_id: TodoListId,
    title: String,
    #[serde(default)]
    body: Option<String>,
}

impl CreateTodoItemRequest {
    /// Creates a request for an item titled `title` in `list_id`.
    #[must_use]
    pub fn new(list_id: TodoListId, title: impl Into<String>) -> Self {
        Self {
            list_id,
            title: title.into(),
            body: None,
        }
    }

    /// Sets the item body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Returns the parent list identifier.
    #[must_use]
    pub const fn list_id(&self) -> TodoListId {
        self.list_id
    }
}

/// Request payload for revising a todo item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoItemRequest {
    list_id: TodoListId,
    title: String,
    #[serde(default)]
    body: Option<String>,
}

impl UpdateTodoItemRequest {
    /// Creates a request replacing the title of an item in `list_id`.
    #[must_use]
    pub fn new(list_id: TodoListId, title: impl Into<String>) -> Self {
        Self {
            list_id,
            title: title.into(),
            body: None,
        }
    }

    /// Sets the replacement body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Todo item workflow.
#[derive(Clone)]
pub struct TodoItemService<R, C>
where
    R: TodoListRepository + TodoItemRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TodoItemService<R, C>
where
    R: TodoListRepository + TodoItemRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new item service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates an item in an existing list owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound::List`] when the parent list is absent or owned by
    /// someone else, [`super::TodoServiceError::Domain`] when the title is
    /// invalid, or [`super::TodoServiceError::Repository`] when persistence
    /// fails.
    #[instrument(skip_all, fields(owner = %owner, list_id = %request.list_id))]
    pub async fn create(
        &self,
        request: CreateTodoItemRequest,
        owner: &OwnerId,
    ) -> TodoServiceResult<TodoItemId> {
        let CreateTodoItemRequest {
            list_id,
            title,
            body,
        } = request;

        let list = self.require_list(list_id).await?;
        if !list.is_owned_by(owner) {
            debug!("parent list owned by another caller");
            return Err(NotFound::List(list_id).into());
        }

        let title = TodoItemTitle::new(title)?;
        let item = TodoItem::new(list_id, owner.clone(), title, body, &*self.clock);
        let stored = self.repository.add_item(&item).await?;
        info!(item_id = %stored.id(), "todo item created");
        Ok(stored.id())
    }

    /// Overwrites title and body of an existing item and returns its
    /// unchanged identifier.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound::List`] when `request.list_id` is absent,
    /// [`NotFound::Item`] when the item is absent or belongs to another list,
    /// [`super::TodoServiceError::Domain`] when the title is invalid, or
    /// [`super::TodoServiceError::Repository`] when persistence fails.
    #[instrument(skip_all, fields(item_id = %item_id, list_id = %request.list_id))]
    pub async fn update(
        &self,
        item_id: TodoItemId,
        request: UpdateTodoItemRequest,
    ) -> TodoServiceResult<TodoItemId> {
        let UpdateTodoItemRequest {
            list_id,
            title,
            body,
        } = request;

        self.require_list(list_id).await?;
        let mut item = self.require_item(item_id).await?;
        if item.list_id() != list_id {
            debug!(actual_list_id = %item.list_id(), "item belongs to another list");
            return Err(NotFound::Item(item_id).into());
        }

        let title = TodoItemTitle::new(title)?;
        item.revise(title, body, &*self.clock);
        self.repository.update_item(&item).await?;
        info!("todo item updated");
        Ok(item.id())
    }

    /// Deletes an existing item.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound::Item`] when the item is absent or
    /// [`super::TodoServiceError::Repository`] when persistence fails.
    #[instrument(skip_all, fields(item_id = %item_id))]
    pub async fn delete(&self, item_id: TodoItemId) -> TodoServiceResult<()> {
        self.require_item(item_id).await?;
        self.repository.delete_item(item_id).await?;
        info!("todo item deleted");
        Ok(())
    }

    /// Returns every item of `list_id` projected into views.
    ///
    /// An empty or absent list both yield an empty `Vec`.
    ///
    /// # Errors
    ///
    /// Returns [`super::TodoServiceError::Repository`] when persistence
    /// lookup fails.
    pub async fn get_all_by_list_id(
        &self,
        list_id: TodoListId,
    ) -> TodoServiceResult<Vec<TodoItemView>> {
        let items = self.repository.find_items_by_list(list_id).await?;
        Ok(items.iter().map(TodoItemView::from).collect())
    }

    /// Finds an item by identifier.
    ///
    /// Returns `Ok(None)` when the item does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`super::TodoServiceError::Repository`] when persistence
    /// lookup fails.
    pub async fn find_by_id(&self, item_id: TodoItemId) -> TodoServiceResult<Option<TodoItem>> {
        Ok(self.repository.find_item(item_id).await?)
    }

    async fn require_list(&self, list_id: TodoListId) -> TodoServiceResult<TodoList> {
        self.repository.find_list(list_id).await?.ok_or_else(|| {
            debug!(list_id = %list_id, "todo list missing");
            NotFound::List(list_id).into()
        })
    }

    async fn require_item(&self, item_id: TodoItemId) -> TodoServiceResult<TodoItem> {
        self.repository.find_item(item_id).await?.ok_or_else(|| {
            debug!(item_id = %item_id, "todo item missing");
            NotFound::Item(item_id).into()
        })
    }
}
