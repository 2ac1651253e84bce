//! In-memory adapters for todo persistence.

mod store;

pub use store::InMemoryTodoStore;
