//! Per-room mutual exclusion.
//!
//! Each room gets its own async mutex, created on first use and dropped
//! again once nobody holds or waits for it. Turns for different rooms never
//! wait on each other; turns for the same room run one at a time.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::RoomId;

#[derive(Debug, Default)]
pub struct RoomLocks {
    locks: DashMap<RoomId, Arc<Mutex<()>>>,
}

impl RoomLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `room_id`.
    ///
    /// The returned guard releases the room when dropped, including when the
    /// awaiting future is cancelled.
    pub async fn acquire(&self, room_id: RoomId) -> RoomGuard<'_> {
        // Clone the Arc out before awaiting so no shard lock is held across the await.
        let lock = self
            .locks
            .entry(room_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone();

        let guard = lock.lock_owned().await;

        RoomGuard {
            locks: &self.locks,
            room_id,
            guard: Some(guard),
        }
    }

    /// Number of rooms that currently have a lock allocated.
    pub fn tracked(&self) -> usize {
        self.locks.len()
    }
}

/// Exclusive access to one room until dropped.
#[derive(Debug)]
pub struct RoomGuard<'a> {
    locks: &'a DashMap<RoomId, Arc<Mutex<()>>>,
    room_id: RoomId,
    guard: Option<OwnedMutexGuard<()>>,
}

impl RoomGuard<'_> {
    pub fn room_id(&self) -> RoomId {
        self.room_id
    }
}

impl Drop for RoomGuard<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());
        // Only the map still references the mutex: no holder, no waiter.
        // `remove_if` runs under the shard lock, which `acquire` also takes,
        // so a concurrent acquirer either sees the old mutex or a fresh one.
        self.locks
            .remove_if(&self.room_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}
