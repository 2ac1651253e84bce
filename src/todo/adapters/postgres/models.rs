//! Diesel row models for todo persistence.

use super::schema::{todo_items, todo_lists};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for todo lists.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todo_lists)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TodoListRow {
    /// List identifier.
    pub id: uuid::Uuid,
    /// Owner identity.
    pub owner: String,
    /// List title.
    pub title: String,
    /// Insertion sequence.
    pub position: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for todo lists. `position` is assigned by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todo_lists)]
pub struct NewTodoListRow {
    /// List identifier.
    pub id: uuid::Uuid,
    /// Owner identity.
    pub owner: String,
    /// List title.
    pub title: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for todo items.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todo_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TodoItemRow {
    /// Item identifier.
    pub id: uuid::Uuid,
    /// Parent list identifier.
    pub list_id: uuid::Uuid,
    /// Owner identity.
    pub owner: String,
    /// Item title.
    pub title: String,
    /// Optional body.
    pub body: Option<String>,
    /// Insertion sequence.
    pub position: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for todo items. `position` is assigned by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todo_items)]
pub struct NewTodoItemRow {
    /// Item identifier.
    pub id: uuid::Uuid,
    /// Parent list identifier.
    pub list_id: uuid::Uuid,
    /// Owner identity.
    pub owner: String,
    /// Item title.
    pub title: String,
    /// Optional body.
    pub body: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
