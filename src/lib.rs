//! Ownership-scoped todo lists and items.
//!
//! This crate provides the workflows behind a todo service: callers create
//! lists they own, add items to those lists, and revise, delete, or enumerate
//! items, with every write validated against the current state of the store.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`todo`]: Lists, items, their persistence ports, and workflows
//! - [`api`]: Route table and response envelope for an HTTP layer
//! - [`config`]: Database settings and connection pool construction

pub mod api;
pub mod config;
pub mod todo;
