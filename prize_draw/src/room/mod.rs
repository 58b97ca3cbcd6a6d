//! Room module: actor-owned state with broadcast fan-out.
//!
//! This module implements:
//! - [`RoomActor`]: async actor owning the [`crate::GameState`] and the
//!   connection registry
//! - [`RoomHandle`]: cloneable handle for sending messages to the actor
//! - the inbound wire protocol ([`ClientMessage`]) and outbound events
//!   ([`ServerEvent`])
//!
//! ## Architecture
//!
//! The room runs in a single Tokio task with an mpsc message inbox. Each
//! message is handled to completion (mutation plus broadcast) before the
//! next is dequeued, which keeps broadcasts strictly ordered with respect
//! to the mutations that produced them. The draw delay is a one-shot task
//! that re-enters the inbox, so delayed completions obey the same ordering
//! rule.

pub mod actor;
pub mod config;
pub mod errors;
pub mod messages;

pub use actor::{RoomActor, RoomHandle};
pub use config::RoomConfig;
pub use errors::RoomError;
pub use messages::{ClientMessage, RoomMessage, ServerEvent};
