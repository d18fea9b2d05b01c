//! Domain logic for the dashboard migration service.
//!
//! Everything here is pure: no I/O, no shared state. The HTTP layer lives in
//! `migrator-api`.

pub mod error;
pub mod migration;
