//! Service layer for todo list creation, discovery, and deletion.

use super::error::{NotFound, TodoServiceResult};
use crate::todo::{
    domain::{OwnerId, TodoList, TodoListId, TodoListTitle, TodoListView},
    ports::TodoListRepository,
};
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Request payload for creating a todo list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoListRequest {
    title: String,
}

impl CreateTodoListRequest {
    /// Creates a request with the list title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Todo list workflow.
#[derive(Clone)]
pub struct TodoListService<R, C>
where
    R: TodoListRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TodoListService<R, C>
where
    R: TodoListRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new list service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a list owned by `owner` and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`super::TodoServiceError::Domain`] when the title is invalid
    /// or [`super::TodoServiceError::Repository`] when persistence fails.
    #[instrument(skip_all, fields(owner = %owner))]
    pub async fn create(
        &self,
        owner: &OwnerId,
        request: CreateTodoListRequest,
    ) -> TodoServiceResult<TodoListId> {
        let title = TodoListTitle::new(request.title)?;
        let list = TodoList::new(owner.clone(), title, &*self.clock);
        let stored = self.repository.add_list(&list).await?;
        info!(list_id = %stored.id(), "todo list created");
        Ok(stored.id())
    }

    /// Deletes a list owned by `caller`, together with its items.
    ///
    /// A list owned by someone else is reported exactly like a missing one.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound::List`] when the list is absent or not owned by
    /// `caller`, or [`super::TodoServiceError::Repository`] when persistence
    /// fails.
    #[instrument(skip_all, fields(caller = %caller, list_id = %list_id))]
    pub async fn delete(&self, caller: &OwnerId, list_id: TodoListId) -> TodoServiceResult<()> {
        let Some(list) = self.repository.find_list(list_id).await? else {
            debug!("todo list missing");
            return Err(NotFound::List(list_id).into());
        };
        if !list.is_owned_by(caller) {
            debug!("todo list owned by another caller");
            return Err(NotFound::List(list_id).into());
        }

        self.repository.delete_list(list_id).await?;
        info!("todo list deleted");
        Ok(())
    }

    /// Returns every list owned by `owner` in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`super::TodoServiceError::Repository`] when persistence
    /// lookup fails.
    pub async fn get_all(&self, owner: &OwnerId) -> TodoServiceResult<Vec<TodoListView>> {
        let lists = self.repository.find_lists_by_owner(owner).await?;
        Ok(lists.iter().map(TodoListView::from).collect())
    }

    /// Finds a list by identifier.
    ///
    /// Returns `Ok(None)` when the list does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`super::TodoServiceError::Repository`] when persistence
    /// lookup fails.
    pub async fn find_by_id(&self, list_id: TodoListId) -> TodoServiceResult<Option<TodoList>> {
        Ok(self.repository.find_list(list_id).await?)
    }
}
