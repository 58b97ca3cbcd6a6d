//! The shared game record and its mutation rules.
//!
//! Every mutation method enforces its own preconditions and reports via its
//! return value whether the mutation was accepted, so the room actor knows
//! whether a broadcast is due. A violated precondition is a silent no-op:
//! the state is untouched and no signal reaches the requester.

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

/// Identifier of a client connection.
pub type ConnId = u64;

/// The single shared game record.
///
/// Owned exclusively by the room actor; all access goes through the
/// mutation and query methods below.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Display names in insertion order. No duplicates, capacity-bounded.
    participants: Vec<String>,

    /// Names drawn so far, in draw order. A winner is permanently
    /// excluded from future draws.
    winners: Vec<String>,

    /// Prizes left to draw. Floors at zero.
    remaining_prizes: u32,

    /// True only between a draw request and its delayed resolution.
    is_drawing: bool,

    /// Connection currently granted host authority.
    host: Option<ConnId>,

    /// Participant capacity.
    max_participants: usize,

    /// Prize count restored on reset.
    total_prizes: u32,
}

impl GameState {
    /// Create an empty game with the given capacity and prize count.
    pub fn new(max_participants: usize, total_prizes: u32) -> Self {
        Self {
            participants: Vec::new(),
            winners: Vec::new(),
            remaining_prizes: total_prizes,
            is_drawing: false,
            host: None,
            max_participants,
            total_prizes,
        }
    }

    /// Register a connection. The first connection with no host assigned
    /// becomes the host.
    ///
    /// Returns `true` if `requester` was granted host authority.
    pub fn connect(&mut self, requester: ConnId) -> bool {
        if self.host.is_none() {
            self.host = Some(requester);
            return true;
        }
        false
    }

    /// Handle a departing connection.
    ///
    /// If `requester` held host authority it moves to `next` (the caller
    /// passes the lowest surviving connection id, or `None` when no
    /// clients remain). Non-host disconnects never touch state.
    ///
    /// Returns `true` if host authority changed.
    pub fn disconnect(&mut self, requester: ConnId, next: Option<ConnId>) -> bool {
        if self.host == Some(requester) {
            self.host = next;
            return true;
        }
        false
    }

    /// Append a participant.
    ///
    /// Accepted only if `name` is non-empty, not already present, and the
    /// capacity has not been reached. Returns whether the name was added.
    pub fn add_participant(&mut self, name: &str) -> bool {
        if name.is_empty()
            || self.participants.iter().any(|p| p == name)
            || self.participants.len() >= self.max_participants
        {
            return false;
        }
        self.participants.push(name.to_string());
        true
    }

    /// Start a draw.
    ///
    /// Accepted only if `requester` is the host, no draw is in flight,
    /// prizes remain, and at least one participant has not yet won. On
    /// acceptance the in-flight flag is set and the eligible names are
    /// returned; the caller holds them across the draw delay and feeds
    /// them back to [`GameState::finish_draw`]. A reset during the delay
    /// does not invalidate the captured list.
    pub fn begin_draw(&mut self, requester: ConnId) -> Option<Vec<String>> {
        if !self.is_host(requester) || self.is_drawing || self.remaining_prizes == 0 {
            return None;
        }
        let eligible: Vec<String> = self
            .participants
            .iter()
            .filter(|&name| !self.winners.contains(name))
            .cloned()
            .collect();
        if eligible.is_empty() {
            return None;
        }
        self.is_drawing = true;
        Some(eligible)
    }

    /// Resolve a draw started by [`GameState::begin_draw`].
    ///
    /// Selects one name uniformly at random from `eligible`, records it as
    /// a winner, and decrements the prize counter. Clears the in-flight
    /// flag unconditionally. Returns the winner.
    pub fn finish_draw(&mut self, eligible: &[String]) -> Option<String> {
        self.is_drawing = false;
        let winner = eligible.choose(&mut rand::rng())?.clone();
        self.winners.push(winner.clone());
        self.remaining_prizes = self.remaining_prizes.saturating_sub(1);
        Some(winner)
    }

    /// Restore the initial empty state, preserving the current host.
    ///
    /// Accepted only if `requester` is the host. The in-flight flag is
    /// cleared, but a pending draw timer is NOT cancelled; when it fires
    /// it will still record its winner against the fresh state.
    pub fn reset(&mut self, requester: ConnId) -> bool {
        if !self.is_host(requester) {
            return false;
        }
        self.participants.clear();
        self.winners.clear();
        self.remaining_prizes = self.total_prizes;
        self.is_drawing = false;
        true
    }

    /// Remove a participant by name. Past winners keep their entry in
    /// `winners` even when removed from `participants`.
    ///
    /// Accepted only if `requester` is the host; the removal itself is
    /// best-effort and an absent name still counts as an accepted (and
    /// therefore broadcast) request.
    pub fn remove_participant(&mut self, requester: ConnId, name: &str) -> bool {
        if !self.is_host(requester) {
            return false;
        }
        self.participants.retain(|p| p != name);
        true
    }

    /// Whether `conn` currently holds host authority.
    pub fn is_host(&self, conn: ConnId) -> bool {
        self.host == Some(conn)
    }

    /// Connection currently granted host authority.
    pub fn host(&self) -> Option<ConnId> {
        self.host
    }

    /// Participants in display order.
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Winners in draw order.
    pub fn winners(&self) -> &[String] {
        &self.winners
    }

    /// Prizes left to draw.
    pub fn remaining_prizes(&self) -> u32 {
        self.remaining_prizes
    }

    /// Whether a draw is in flight.
    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    /// Snapshot the state for one recipient, deriving its `isHost` flag.
    pub fn snapshot(&self, recipient: Option<ConnId>) -> GameStateView {
        GameStateView {
            participants: self.participants.clone(),
            winners: self.winners.clone(),
            remaining_prizes: self.remaining_prizes,
            is_drawing: self.is_drawing,
            is_host: recipient.is_some_and(|conn| self.is_host(conn)),
        }
    }
}

/// Full game state as delivered to a single recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateView {
    pub participants: Vec<String>,
    pub winners: Vec<String>,
    pub remaining_prizes: u32,
    pub is_drawing: bool,
    pub is_host: bool,
}
