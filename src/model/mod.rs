//! Gateway models and type definitions.
//!
//! Application state, request/response DTOs, and typed session wrappers.

pub mod api;
pub mod app;
pub mod session;
