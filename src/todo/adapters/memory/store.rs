//! In-memory store backing both todo repository ports.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::todo::{
    domain::{OwnerId, TodoItem, TodoItemId, TodoList, TodoListId},
    ports::{TodoItemRepository, TodoListRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory store for lists and their items.
///
/// Lists and items share one lock so that deleting a list and its items is
/// a single atomic step.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoStore {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    lists: HashMap<TodoListId, TodoList>,
    items: HashMap<TodoItemId, TodoItem>,
    owner_index: HashMap<OwnerId, Vec<TodoListId>>,
    list_items: HashMap<TodoListId, Vec<TodoItemId>>,
}

impl InMemoryTodoStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TodoRepositoryResult<RwLockReadGuard<'_, InMemoryTodoState>> {
        self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TodoRepositoryResult<RwLockWriteGuard<'_, InMemoryTodoState>> {
        self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

/// Removes an ID from an ordered index, cleaning up the entry if empty.
fn remove_from_index<K, V>(index: &mut HashMap<K, Vec<V>>, key: &K, value: &V)
where
    K: std::hash::Hash + Eq,
    V: PartialEq,
{
    if let Some(values) = index.get_mut(key) {
        values.retain(|candidate| candidate != value);
        if values.is_empty() {
            index.remove(key);
        }
    }
}

#[async_trait]
impl TodoListRepository for InMemoryTodoStore {
    async fn add_list(&self, list: &TodoList) -> TodoRepositoryResult<TodoList> {
        let mut state = self.write()?;
        if state.lists.contains_key(&list.id()) {
            return Err(TodoRepositoryError::DuplicateList(list.id()));
        }

        state
            .owner_index
            .entry(list.owner().clone())
            .or_default()
            .push(list.id());
        state.lists.insert(list.id(), list.clone());
        Ok(list.clone())
    }

    async fn find_list(&self, id: TodoListId) -> TodoRepositoryResult<Option<TodoList>> {
        let state = self.read()?;
        Ok(state.lists.get(&id).cloned())
    }

    async fn find_lists_by_owner(&self, owner: &OwnerId) -> TodoRepositoryResult<Vec<TodoList>> {
        let state = self.read()?;
        let lists = state
            .owner_index
            .get(owner)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.lists.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(lists)
    }

    async fn delete_list(&self, id: TodoListId) -> TodoRepositoryResult<()> {
        let mut state = self.write()?;
        let removed = state
            .lists
            .remove(&id)
            .ok_or(TodoRepositoryError::ListNotFound(id))?;

        remove_from_index(&mut state.owner_index, removed.owner(), &id);
        // Cascade to the list's items.
        if let Some(item_ids) = state.list_items.remove(&id) {
            for item_id in item_ids {
                state.items.remove(&item_id);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl TodoItemRepository for InMemoryTodoStore {
    async fn add_item(&self, item: &TodoItem) -> TodoRepositoryResult<TodoItem> {
        let mut state = self.write()?;
        if state.items.contains_key(&item.id()) {
            return Err(TodoRepositoryError::DuplicateItem(item.id()));
        }
        if !state.lists.contains_key(&item.list_id()) {
            return Err(TodoRepositoryError::ListNotFound(item.list_id()));
        }

        state
            .list_items
            .entry(item.list_id())
            .or_default()
            .push(item.id());
        state.items.insert(item.id(), item.clone());
        Ok(item.clone())
    }

    async fn find_item(&self, id: TodoItemId) -> TodoRepositoryResult<Option<TodoItem>> {
        let state = self.read()?;
        Ok(state.items.get(&id).cloned())
    }

    async fn find_items_by_list(&self, list_id: TodoListId) -> TodoRepositoryResult<Vec<TodoItem>> {
        let state = self.read()?;
        let items = state
            .list_items
            .get(&list_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.items.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(items)
    }

    async fn update_item(&self, item: &TodoItem) -> TodoRepositoryResult<()> {
        let mut state = self.write()?;
        let stored = state
            .items
            .get_mut(&item.id())
            .ok_or(TodoRepositoryError::ItemNotFound(item.id()))?;
        stored.apply_revision_from(item);
        Ok(())
    }

    async fn delete_item(&self, id: TodoItemId) -> TodoRepositoryResult<()> {
        let mut state = self.write()?;
        let removed = state
            .items
            .remove(&id)
            .ok_or(TodoRepositoryError::ItemNotFound(id))?;
        remove_from_index(&mut state.list_items, &removed.list_id(), &id);
        Ok(())
    }
}
