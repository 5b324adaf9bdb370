//! Service layer bridging controllers and the upstream client.
//!
//! Services translate upstream client failures into the gateway's error
//! taxonomy; no domain logic lives here beyond that mapping.

pub mod auth;
pub mod races;
