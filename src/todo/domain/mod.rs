//! Domain model for todo lists and items.
//!
//! Lists own items by reference: each item records its parent
//! [`TodoListId`], and navigation from a list to its items is always an
//! explicit repository query.

mod error;
mod ids;
mod item;
mod list;
mod title;

pub use error::TodoDomainError;
pub use ids::{MAX_OWNER_CHARS, OwnerId, TodoItemId, TodoListId};
pub use item::{PersistedTodoItemData, TodoItem, TodoItemView};
pub use list::{PersistedTodoListData, TodoList, TodoListView};
pub use title::{MAX_TITLE_CHARS, TodoItemTitle, TodoListTitle};
