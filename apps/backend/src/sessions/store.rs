use crate::domain::{RoomId, Transcript, Turn};
use crate::errors::DomainError;

/// One live room as returned by [`SessionStore::list`].
pub type RoomEntry = (RoomId, Transcript);

/// Mapping from room id to transcript.
///
/// A room is present exactly while its game is in progress. Implementations
/// perform no I/O and fail only with `Conflict` (create on an existing room)
/// or `NotFound` (append to a missing room).
///
/// The store does not serialize multi-step sequences; callers that read,
/// check and write the same room must hold that room's lock
/// (see `services::RoomLocks`).
pub trait SessionStore: Send + Sync {
    /// Snapshot of the room's transcript, if the room is active.
    fn get(&self, room_id: RoomId) -> Option<Transcript>;

    fn exists(&self, room_id: RoomId) -> bool {
        self.get(room_id).is_some()
    }

    /// Register a new room seeded with `initial` turns.
    ///
    /// Returns `DomainError::Conflict(RoomExists)` if the room is already present.
    fn create(&self, room_id: RoomId, initial: Vec<Turn>) -> Result<(), DomainError>;

    /// Append one turn to an active room.
    ///
    /// Returns `DomainError::NotFound(Room)` if the room is absent.
    fn append(&self, room_id: RoomId, turn: Turn) -> Result<(), DomainError>;

    /// Drop the room. Removing an absent room is a no-op.
    fn remove(&self, room_id: RoomId);

    /// Snapshot of every live room; order is unspecified.
    fn list(&self) -> Vec<RoomEntry>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
