//! Route table binding HTTP verbs and paths to todo workflows.

use axum::http::{Method, StatusCode};
use std::fmt;

/// Operations exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoRoute {
    /// Create a list owned by the caller.
    CreateList,
    /// Delete a list and its items.
    DeleteList,
    /// Create an item in an existing list.
    CreateItem,
    /// Revise an item's title and body.
    UpdateItem,
    /// Delete an item.
    DeleteItem,
    /// List the items of a list.
    ListItemsByList,
}

impl TodoRoute {
    /// Every route, in table order.
    pub const ALL: [Self; 6] = [
        Self::CreateList,
        Self::DeleteList,
        Self::CreateItem,
        Self::UpdateItem,
        Self::DeleteItem,
        Self::ListItemsByList,
    ];

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(self) -> Method {
        match self {
            Self::CreateList | Self::CreateItem => Method::POST,
            Self::DeleteList | Self::DeleteItem => Method::DELETE,
            Self::UpdateItem => Method::PUT,
            Self::ListItemsByList => Method::GET,
        }
    }

    /// Returns the path pattern in axum's `{id}` capture syntax.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::CreateList => "/todoLists",
            Self::DeleteList => "/todoLists/{id}",
            Self::CreateItem => "/todoItems",
            Self::UpdateItem | Self::DeleteItem => "/todoItems/{id}",
            Self::ListItemsByList => "/todoLists/{id}/todoItems",
        }
    }

    /// Returns the status code reported on success.
    #[must_use]
    pub const fn success_status(self) -> StatusCode {
        match self {
            Self::CreateList | Self::CreateItem => StatusCode::CREATED,
            Self::DeleteList | Self::UpdateItem | Self::DeleteItem | Self::ListItemsByList => {
                StatusCode::OK
            }
        }
    }
}

impl fmt::Display for TodoRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}
