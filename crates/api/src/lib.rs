//! Dashboard migration API server library.
//!
//! Exposes config, state, error handling, handlers, and the router builder so
//! integration tests and the binary entrypoint share the same wiring.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
