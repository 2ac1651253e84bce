//! Step definitions for todo workflow scenarios.
