//! # Prize Draw
//!
//! A real-time prize-draw coordination engine.
//!
//! One connected client, the first to connect, holds host authority and
//! can trigger random winner draws, reset the game, and remove
//! participants. Any client can add participants. Every connected client
//! receives the full game state after each accepted mutation, annotated
//! with whether that recipient is the host.
//!
//! ## Architecture
//!
//! The shared [`GameState`] is owned by a single [`RoomActor`] task with an
//! mpsc message inbox. All client requests arrive as [`RoomMessage`]s and
//! are processed to completion (mutation plus broadcast) before the next
//! one begins, so a broadcast always observes the state immediately after
//! the mutation that produced it. The one asynchronous edge is the draw
//! delay: a draw broadcasts an in-progress state, then a one-shot task
//! re-enters the inbox after the configured delay to finalize the winner.
//!
//! Disallowed requests (a non-host drawing, a duplicate participant name,
//! a draw while one is in flight) are silent no-ops: no state change, no
//! broadcast, no error back to the requester.
//!
//! ## Core Modules
//!
//! - [`game`]: the game state record, its mutation rules, and invariants
//! - [`room`]: the room actor, connection registry, and wire protocol
//!
//! ## Example
//!
//! ```
//! use prize_draw::{RoomActor, RoomConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let (actor, handle) = RoomActor::new(RoomConfig::default());
//! tokio::spawn(actor.run());
//! // Use the handle to send RoomMessages.
//! # drop(handle);
//! # }
//! ```

/// Game state record and mutation rules.
pub mod game;
pub use game::{
    ConnId, GameState, GameStateView,
    constants::{self, DRAW_DELAY_MS, MAX_PARTICIPANTS, TOTAL_PRIZES},
};

/// Room actor, connection registry, and wire protocol.
pub mod room;
pub use room::{
    ClientMessage, RoomActor, RoomConfig, RoomError, RoomHandle, RoomMessage, ServerEvent,
};
