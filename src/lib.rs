//! GreatRace gateway core modules.
//!
//! This crate contains the HTTP gateway that authenticates a member against
//! the iRacing data service and proxies their recent race results behind a
//! server-side session cookie. All domain logic is delegated to the
//! `iracing` client crate; the gateway wires routes, CORS, configuration,
//! and session state around it.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
