//! Room error types.

use thiserror::Error;

/// Infrastructure failures of the room channel.
///
/// Game-rule precondition violations are deliberately NOT errors; they are
/// silent no-ops by contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoomError {
    /// The room actor has stopped and its inbox is closed.
    #[error("room is closed")]
    Closed,
}
