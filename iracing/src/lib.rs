//! Minimal client for the iRacing data API.
//!
//! This crate exposes the [`RacingClient`] trait the GreatRace gateway
//! depends on — login plus recent-race retrieval — along with the concrete
//! reqwest-backed [`Client`]. The trait keeps the gateway polymorphic over
//! the provider so tests can substitute an in-memory stand-in.

pub mod client;
pub mod config;
pub mod error;

pub use client::{Client, ClientBuilder, RacingClient};
pub use config::Config;
pub use error::Error;
