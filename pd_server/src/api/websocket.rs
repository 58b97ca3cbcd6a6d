//! WebSocket handler for real-time game updates.
//!
//! # Connection Flow
//!
//! 1. Client connects via `GET /ws` and is assigned a fresh connection id
//! 2. The connection registers with the room actor, which replies with a
//!    state snapshot for this client only
//! 3. A send task forwards room events to the socket while the receive
//!    loop parses client commands into room messages
//! 4. On disconnect both tasks are cleaned up and the room is told, which
//!    may reassign host authority
//!
//! Malformed or unknown client messages are logged and ignored, the
//! transport-level counterpart of the room's silent no-op policy.

use std::sync::atomic::Ordering;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use log::{debug, error, info, warn};
use prize_draw::{ClientMessage, ConnId, RoomMessage, ServerEvent};

use super::AppState;

/// Upgrade an HTTP connection to the real-time WebSocket protocol.
pub async fn websocket_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle an established WebSocket connection.
async fn handle_socket(socket: WebSocket, state: AppState) {
    let conn_id = state.next_conn_id.fetch_add(1, Ordering::Relaxed);
    let (mut sender, mut receiver) = socket.split();

    info!("WebSocket connected: conn={conn_id}");
    state.connected.fetch_add(1, Ordering::Relaxed);

    // Register with the room; the first event on this channel is the
    // snapshot addressed to this client alone.
    let (event_tx, mut event_rx) = tokio::sync::mpsc::channel::<ServerEvent>(32);
    if state
        .room
        .send(RoomMessage::Connect {
            conn_id,
            sender: event_tx,
        })
        .await
        .is_err()
    {
        error!("Room is closed, dropping connection {conn_id}");
        state.connected.fetch_sub(1, Ordering::Relaxed);
        return;
    }

    // Forward room events to the socket.
    let send_task = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            let json = match serde_json::to_string(&event) {
                Ok(json) => json,
                Err(e) => {
                    error!("Failed to serialize event for conn {conn_id}: {e}");
                    continue;
                }
            };

            if sender.send(Message::Text(json.into())).await.is_err() {
                break;
            }
        }
    });

    // Receive messages from the client.
    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => match serde_json::from_str::<ClientMessage>(&text) {
                Ok(client_msg) => {
                    debug!("conn {conn_id}: {client_msg:?}");
                    if state
                        .room
                        .send(to_room_message(conn_id, client_msg))
                        .await
                        .is_err()
                    {
                        break;
                    }
                }
                Err(e) => {
                    warn!("conn {conn_id}: ignoring unparseable message: {e}");
                }
            },
            Ok(Message::Close(_)) => {
                info!("WebSocket closed: conn={conn_id}");
                break;
            }
            Err(e) => {
                warn!("WebSocket error on conn {conn_id}: {e}");
                break;
            }
            _ => {}
        }
    }

    // Cleanup; the room reassigns host authority if this was the host.
    send_task.abort();
    let _ = state.room.send(RoomMessage::Disconnect { conn_id }).await;
    state.connected.fetch_sub(1, Ordering::Relaxed);

    info!("WebSocket disconnected: conn={conn_id}");
}

/// Stamp a parsed client message with the connection's identity.
fn to_room_message(conn_id: ConnId, msg: ClientMessage) -> RoomMessage {
    match msg {
        ClientMessage::AddParticipant { name } => RoomMessage::AddParticipant { conn_id, name },
        ClientMessage::Draw => RoomMessage::Draw { conn_id },
        ClientMessage::Reset => RoomMessage::Reset { conn_id },
        ClientMessage::RemoveParticipant { name } => {
            RoomMessage::RemoveParticipant { conn_id, name }
        }
    }
}
