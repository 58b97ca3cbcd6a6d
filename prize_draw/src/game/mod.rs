//! Game state and mutation rules for the prize draw.
//!
//! This module provides:
//! - [`GameState`]: the single shared game record
//! - the five mutation operations with their host-authority and capacity
//!   preconditions
//! - [`GameStateView`]: the per-recipient snapshot delivered over the wire

pub mod constants;
pub mod state;

pub use state::{ConnId, GameState, GameStateView};
