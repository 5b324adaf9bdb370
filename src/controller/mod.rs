//! HTTP controller endpoints for the GreatRace web API.
//!
//! Axum handlers for authentication and race-data retrieval. Controllers
//! handle HTTP requests, enforce the session gate, call into services, and
//! return appropriate HTTP responses. They integrate with tower-sessions
//! for session management and use utoipa for OpenAPI documentation.

pub mod auth;
pub mod races;
