//! Transport-facing contract for the todo workflows.
//!
//! This module owns no server: it fixes the route table and the response
//! envelope, expressed in axum's `http` types, so that any HTTP layer maps
//! workflow results the same way.

mod envelope;
mod route;

pub use envelope::{ApiResult, status_for_error};
pub use route::TodoRoute;
