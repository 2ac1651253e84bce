//! Validated title values for lists and items.

use super::TodoDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest title length accepted by the `todo_lists` and `todo_items` schema.
pub const MAX_TITLE_CHARS: usize = 255;

fn normalize_title(raw: &str, empty: TodoDomainError) -> Result<String, TodoDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(empty);
    }
    let actual = trimmed.chars().count();
    if actual > MAX_TITLE_CHARS {
        return Err(TodoDomainError::TitleTooLong {
            max: MAX_TITLE_CHARS,
            actual,
        });
    }
    Ok(trimmed.to_owned())
}

/// Non-empty title of a todo list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoListTitle(String);

impl TodoListTitle {
    /// Creates a validated list title.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyListTitle`] when the title is blank or
    /// [`TodoDomainError::TitleTooLong`] when it exceeds [`MAX_TITLE_CHARS`].
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        let raw = value.into();
        normalize_title(&raw, TodoDomainError::EmptyListTitle).map(Self)
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoListTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty title of a todo item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoItemTitle(String);

impl TodoItemTitle {
    /// Creates a validated item title.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyItemTitle`] when the title is blank or
    /// [`TodoDomainError::TitleTooLong`] when it exceeds [`MAX_TITLE_CHARS`].
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        let raw = value.into();
        normalize_title(&raw, TodoDomainError::EmptyItemTitle).map(Self)
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoItemTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for TodoListTitle {
    type Error = TodoDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TodoListTitle> for String {
    fn from(title: TodoListTitle) -> Self {
        title.0
    }
}

impl TryFrom<String> for TodoItemTitle {
    type Error = TodoDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TodoItemTitle> for String {
    fn from(title: TodoItemTitle) -> Self {
        title.0
    }
}
