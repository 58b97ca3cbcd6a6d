//! Server-side components of the prize-draw coordinator.
//!
//! Exposed as a library so integration tests can build the router and
//! application state directly; the `pd_server` binary is a thin wrapper
//! around these modules.

pub mod api;
pub mod config;
