//! Application services.

pub mod orchestrator;
pub mod room_locks;

pub use orchestrator::{ConversationOrchestrator, RoomView};
pub use room_locks::{RoomGuard, RoomLocks};
