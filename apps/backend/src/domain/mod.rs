//! Domain layer: conversation types and the pure game rules.

pub mod prompt;
pub mod rules;
pub mod transcript;
pub mod turn;

pub use rules::{is_start_trigger, is_termination_signal, AnswerKind};
pub use transcript::Transcript;
pub use turn::{Role, Turn};

/// Opaque room key supplied by the transport layer.
pub type RoomId = i64;
