//! Clario suggestion intake service library.
//!
//! Exposes the building blocks (config, state, error handling, routes, the
//! assembled router) so integration tests and the binary entrypoint share
//! them.

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
