//! Adapter implementations for todo repository ports.

pub mod memory;
pub mod postgres;
