//! Process-local session store backed by a sharded concurrent map.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::trace;

use super::store::{RoomEntry, SessionStore};
use crate::domain::{RoomId, Transcript, Turn};
use crate::errors::DomainError;

/// In-memory [`SessionStore`].
///
/// Rooms live in separate `DashMap` shards, so operations on different rooms
/// do not contend on a single lock. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    rooms: DashMap<RoomId, Transcript>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, room_id: RoomId) -> Option<Transcript> {
        self.rooms.get(&room_id).map(|entry| entry.value().clone())
    }

    fn exists(&self, room_id: RoomId) -> bool {
        self.rooms.contains_key(&room_id)
    }

    fn create(&self, room_id: RoomId, initial: Vec<Turn>) -> Result<(), DomainError> {
        match self.rooms.entry(room_id) {
            Entry::Occupied(_) => Err(DomainError::room_exists(room_id)),
            Entry::Vacant(slot) => {
                trace!(room_id, turns = initial.len(), "room created");
                slot.insert(Transcript::from_turns(initial));
                Ok(())
            }
        }
    }

    fn append(&self, room_id: RoomId, turn: Turn) -> Result<(), DomainError> {
        let mut transcript = self
            .rooms
            .get_mut(&room_id)
            .ok_or_else(|| DomainError::room_not_found(room_id))?;
        transcript.push(turn);
        Ok(())
    }

    fn remove(&self, room_id: RoomId) {
        if self.rooms.remove(&room_id).is_some() {
            trace!(room_id, "room removed");
        }
    }

    fn list(&self) -> Vec<RoomEntry> {
        self.rooms
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect()
    }

    fn len(&self) -> usize {
        self.rooms.len()
    }
}
