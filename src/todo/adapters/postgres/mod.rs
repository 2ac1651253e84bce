//! `PostgreSQL` adapters for todo persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTodoStore, TodoPgPool};
