//! Unique fixture ids, so tests sharing one store never step on each other.

use std::sync::atomic::{AtomicI64, Ordering};

use once_cell::sync::Lazy;
use ulid::Ulid;

// Seeded from a ULID so separate test binaries start far apart.
static NEXT_ROOM_ID: Lazy<AtomicI64> =
    Lazy::new(|| AtomicI64::new((Ulid::new().random() as i64 & (i64::MAX >> 20)) + 1));

/// A positive room id not handed out before in this process.
pub fn unique_room_id() -> i64 {
    NEXT_ROOM_ID.fetch_add(1, Ordering::Relaxed)
}

/// `{prefix}-{ulid}`
pub fn unique_str(prefix: &str) -> String {
    format!("{prefix}-{}", Ulid::new())
}
