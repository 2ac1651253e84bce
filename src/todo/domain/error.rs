//! Error types for todo domain validation.

use thiserror::Error;

/// Errors returned while constructing todo domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The list title is empty after trimming.
    #[error("todo list title must not be empty")]
    EmptyListTitle,

    /// The item title is empty after trimming.
    #[error("todo item title must not be empty")]
    EmptyItemTitle,

    /// A title exceeds the storage limit.
    #[error("title exceeds {max} character limit ({actual} characters)")]
    TitleTooLong {
        /// Maximum permitted character count.
        max: usize,
        /// Character count of the rejected title.
        actual: usize,
    },

    /// The owner identity is empty after trimming.
    #[error("owner identity must not be empty")]
    EmptyOwner,

    /// The owner identity exceeds the storage limit.
    #[error("owner identity exceeds {max} character limit ({actual} characters)")]
    OwnerTooLong {
        /// Maximum permitted character count.
        max: usize,
        /// Character count of the rejected identity.
        actual: usize,
    },
}
