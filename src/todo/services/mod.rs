//! Application services for todo list and item workflows.

mod error;
mod item;
mod list;

pub use error::{NotFound, TodoServiceError, TodoServiceResult};
pub use item::{CreateTodoItemRequest, TodoItemService, UpdateTodoItemRequest};
pub use list::{CreateTodoListRequest, TodoListService};
