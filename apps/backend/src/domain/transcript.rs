//! Ordered conversation history for a single room.

use serde::{Deserialize, Serialize};

use super::turn::{Role, Turn};

/// Full message history of a room, in insertion order.
///
/// This is exactly what gets sent to the completion backend, so the order of
/// `turns` is never rearranged. Only appending is possible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn from_turns(turns: Vec<Turn>) -> Self {
        Self { turns }
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Number of turns carrying the given role.
    pub fn count_role(&self, role: Role) -> usize {
        self.turns.iter().filter(|t| t.role() == role).count()
    }

    pub fn roles(&self) -> Vec<Role> {
        self.turns.iter().map(Turn::role).collect()
    }
}
