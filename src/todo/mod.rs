//! Todo list and item management.
//!
//! Lists are owned by the caller that created them; items belong to exactly
//! one list and are only written while that list exists. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
