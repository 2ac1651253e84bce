//! Identifier and validated scalar types for the todo domain.

use super::TodoDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a todo list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoListId(Uuid);

impl TodoListId {
    /// Creates a new random list identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a list identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TodoListId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for TodoListId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TodoListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a todo item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoItemId(Uuid);

impl TodoItemId {
    /// Creates a new random item identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an item identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TodoItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for TodoItemId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TodoItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Largest owner identity accepted by the `owner` columns.
pub const MAX_OWNER_CHARS: usize = 255;

/// Opaque identity of the authenticated caller that owns an entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OwnerId(String);

impl OwnerId {
    /// Creates a validated owner identity.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyOwner`] when the value is empty after
    /// trimming, or [`TodoDomainError::OwnerTooLong`] when it exceeds
    /// [`MAX_OWNER_CHARS`].
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TodoDomainError::EmptyOwner);
        }
        let actual = trimmed.chars().count();
        if actual > MAX_OWNER_CHARS {
            return Err(TodoDomainError::OwnerTooLong {
                max: MAX_OWNER_CHARS,
                actual,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identity as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for OwnerId {
    type Error = TodoDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OwnerId> for String {
    fn from(owner: OwnerId) -> Self {
        owner.0
    }
}

impl AsRef<str> for OwnerId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
