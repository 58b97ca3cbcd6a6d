//! Room actor implementation with async message handling.

use std::collections::BTreeMap;

use log::{debug, info, warn};
use tokio::sync::mpsc;
use tokio::time::sleep;

use super::{
    config::RoomConfig,
    errors::RoomError,
    messages::{RoomMessage, ServerEvent},
};
use crate::game::{ConnId, GameState};

/// Room actor handle for sending messages.
#[derive(Clone)]
pub struct RoomHandle {
    sender: mpsc::Sender<RoomMessage>,
}

impl RoomHandle {
    /// Create a new room handle.
    pub fn new(sender: mpsc::Sender<RoomMessage>) -> Self {
        Self { sender }
    }

    /// Send a message to the room.
    pub async fn send(&self, message: RoomMessage) -> Result<(), RoomError> {
        self.sender
            .send(message)
            .await
            .map_err(|_| RoomError::Closed)
    }
}

/// Room actor owning the game state and the connection registry.
///
/// Messages are processed one at a time; each accepted mutation and its
/// broadcast complete before the next message is dequeued.
pub struct RoomActor {
    /// Room configuration.
    config: RoomConfig,

    /// The shared game record.
    state: GameState,

    /// Message inbox.
    inbox: mpsc::Receiver<RoomMessage>,

    /// Inbox sender, cloned into draw-delay tasks so their completion
    /// re-enters the mutation path like any other request.
    sender: mpsc::Sender<RoomMessage>,

    /// Connection registry. A BTreeMap keeps enumeration deterministic:
    /// host authority is reassigned to the lowest surviving id.
    connections: BTreeMap<ConnId, mpsc::Sender<ServerEvent>>,
}

impl RoomActor {
    /// Create a new room actor.
    ///
    /// Returns the actor and a handle for sending messages. Spawn the
    /// actor with [`RoomActor::run`].
    pub fn new(config: RoomConfig) -> (Self, RoomHandle) {
        let (sender, inbox) = mpsc::channel(100);

        let state = GameState::new(config.max_participants, config.total_prizes);

        let actor = Self {
            config,
            state,
            inbox,
            sender: sender.clone(),
            connections: BTreeMap::new(),
        };

        let handle = RoomHandle::new(sender);

        (actor, handle)
    }

    /// Run the room actor event loop.
    pub async fn run(mut self) {
        info!(
            "Room starting: {} prize(s), capacity {}",
            self.config.total_prizes, self.config.max_participants
        );

        while let Some(message) = self.inbox.recv().await {
            self.handle_message(message);
        }

        info!("Room closed");
    }

    /// Handle a room message.
    fn handle_message(&mut self, message: RoomMessage) {
        match message {
            RoomMessage::Connect { conn_id, sender } => {
                if self.state.connect(conn_id) {
                    info!("Connection {conn_id} granted host authority");
                }

                // Snapshot goes to the new connection only.
                let event = ServerEvent::GameState(self.state.snapshot(Some(conn_id)));
                if sender.try_send(event).is_ok() {
                    self.connections.insert(conn_id, sender);
                    debug!("Connection {conn_id} registered ({} total)", self.connections.len());
                } else {
                    debug!("Connection {conn_id} gone before its snapshot was sent");
                }
            }

            RoomMessage::Disconnect { conn_id } => {
                self.connections.remove(&conn_id);
                let next = self.connections.keys().next().copied();
                if self.state.disconnect(conn_id, next) {
                    match next {
                        Some(new_host) => info!("Host left, authority moved to {new_host}"),
                        None => info!("Host left with no clients remaining"),
                    }
                    self.broadcast_state();
                }
                debug!("Connection {conn_id} removed ({} total)", self.connections.len());
            }

            RoomMessage::AddParticipant { conn_id, name } => {
                if self.state.add_participant(&name) {
                    info!(
                        "Participant \"{}\" added ({}/{})",
                        name,
                        self.state.participants().len(),
                        self.config.max_participants
                    );
                    self.broadcast_state();
                } else {
                    debug!("Ignored addParticipant \"{name}\" from connection {conn_id}");
                }
            }

            RoomMessage::Draw { conn_id } => {
                if let Some(eligible) = self.state.begin_draw(conn_id) {
                    info!("Draw started with {} eligible participant(s)", eligible.len());
                    self.broadcast_state();

                    // One-shot completion; not cancelable, even by a reset.
                    let delay = self.config.draw_delay();
                    let sender = self.sender.clone();
                    tokio::spawn(async move {
                        sleep(delay).await;
                        let _ = sender.send(RoomMessage::FinishDraw { eligible }).await;
                    });
                } else {
                    debug!("Ignored draw from connection {conn_id}");
                }
            }

            RoomMessage::FinishDraw { eligible } => {
                if let Some(winner) = self.state.finish_draw(&eligible) {
                    info!(
                        "Winner drawn: \"{}\" ({} prize(s) left)",
                        winner,
                        self.state.remaining_prizes()
                    );
                    self.broadcast_state();
                    self.broadcast(ServerEvent::Winner { name: winner });
                }
            }

            RoomMessage::Reset { conn_id } => {
                if self.state.reset(conn_id) {
                    info!("Game reset by host");
                    self.broadcast_state();
                } else {
                    debug!("Ignored reset from connection {conn_id}");
                }
            }

            RoomMessage::RemoveParticipant { conn_id, name } => {
                if self.state.remove_participant(conn_id, &name) {
                    info!("Participant \"{name}\" removed");
                    self.broadcast_state();
                } else {
                    debug!("Ignored removeParticipant \"{name}\" from connection {conn_id}");
                }
            }

            RoomMessage::GetState { conn_id, response } => {
                let _ = response.send(self.state.snapshot(conn_id));
            }
        }
    }

    /// Push the current state to every connection, deriving each
    /// recipient's `isHost` flag.
    fn broadcast_state(&mut self) {
        let state = &self.state;
        self.connections.retain(|conn_id, sender| {
            let event = ServerEvent::GameState(state.snapshot(Some(*conn_id)));
            match sender.try_send(event) {
                Ok(()) => true,
                Err(mpsc::error::TrySendError::Full(_)) => {
                    warn!("Connection {conn_id} send buffer full, dropping update");
                    true
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    debug!("Connection {conn_id} disconnected, removing from registry");
                    false
                }
            }
        });
    }

    /// Push one identical event to every connection.
    fn broadcast(&mut self, event: ServerEvent) {
        self.connections.retain(|conn_id, sender| {
            match sender.try_send(event.clone()) {
                Ok(()) => true,
                Err(mpsc::error::TrySendError::Full(_)) => {
                    warn!("Connection {conn_id} send buffer full, dropping event");
                    true
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    debug!("Connection {conn_id} disconnected, removing from registry");
                    false
                }
            }
        });
    }
}
