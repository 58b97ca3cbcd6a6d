//! Room actor message types and the client wire protocol.

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};

use crate::game::{ConnId, GameStateView};

/// Messages that can be sent to a [`crate::RoomActor`].
#[derive(Debug)]
pub enum RoomMessage {
    /// A client connected. Registers its event channel, assigns host
    /// authority if vacant, and sends the snapshot to this client only.
    Connect {
        conn_id: ConnId,
        sender: mpsc::Sender<ServerEvent>,
    },

    /// A client disconnected. Host authority moves to the lowest
    /// surviving connection id.
    Disconnect { conn_id: ConnId },

    /// Append a participant name. Open to every connection.
    AddParticipant { conn_id: ConnId, name: String },

    /// Start a winner draw. Host only.
    Draw { conn_id: ConnId },

    /// Restore the initial empty state, keeping the host. Host only.
    Reset { conn_id: ConnId },

    /// Remove a participant by name. Host only.
    RemoveParticipant { conn_id: ConnId, name: String },

    /// Internal: delayed completion of a draw, carrying the eligible
    /// names captured when the draw began.
    FinishDraw { eligible: Vec<String> },

    /// Snapshot of the current state, for diagnostics and tests.
    GetState {
        conn_id: Option<ConnId>,
        response: oneshot::Sender<GameStateView>,
    },
}

/// Client messages received over the WebSocket.
///
/// Connect and disconnect are implicit in the socket lifecycle and have no
/// wire representation. Unknown or unparseable messages are logged and
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    /// Add a participant by display name.
    AddParticipant { name: String },

    /// Trigger a winner draw.
    Draw,

    /// Reset the game.
    Reset,

    /// Remove a participant by display name.
    RemoveParticipant { name: String },
}

/// Events pushed from the room to connected clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerEvent {
    /// Full game state, annotated per recipient with its `isHost` flag.
    GameState(GameStateView),

    /// A draw resolved; carries just the winning name. Identical for all
    /// recipients.
    Winner { name: String },
}
