//! Port contracts for todo persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by todo services.

pub mod repository;

pub use repository::{
    TodoItemRepository, TodoListRepository, TodoRepositoryError, TodoRepositoryResult,
};
