//! Per-turn protocol of the guessing game.
//!
//! One call to [`ConversationOrchestrator::take_turn`] runs, under the
//! room's lock:
//!
//! 1. start a transcript if the room is idle and the input is the trigger,
//! 2. fail with `NotFound` if the room is idle and the input is anything else,
//! 3. append the user turn,
//! 4. send the whole transcript to the completion backend,
//! 5. append the assistant turn,
//! 6. drop the room if the reply announces the end of the game,
//! 7. hand the raw reply back.
//!
//! A backend failure after step 3 leaves the user turn in place with no
//! answer. The next turn simply appends after it.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::room_locks::RoomLocks;
use crate::domain::prompt::SYSTEM_PROMPT;
use crate::domain::{
    is_start_trigger, is_termination_signal, AnswerKind, RoomId, Transcript, Turn,
};
use crate::errors::DomainError;
use crate::llm::CompletionBackend;
use crate::logging::Redacted;
use crate::sessions::SessionStore;

/// Read-only view of one live room, shaped for the room listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomView {
    pub room_id: RoomId,
    pub chat_messages: Transcript,
}

pub struct ConversationOrchestrator {
    store: Arc<dyn SessionStore>,
    backend: Arc<dyn CompletionBackend>,
    locks: RoomLocks,
    system_prompt: Arc<str>,
}

impl ConversationOrchestrator {
    pub fn new(store: Arc<dyn SessionStore>, backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            store,
            backend,
            locks: RoomLocks::new(),
            system_prompt: Arc::from(SYSTEM_PROMPT),
        }
    }

    /// Replace the game-master instructions seeded into new rooms.
    pub fn with_system_prompt(mut self, prompt: impl Into<Arc<str>>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Play one turn for `room_id` and return the backend's reply unchanged.
    ///
    /// Errors:
    /// - `DomainError::NotFound(Room)` when the room has no game in progress
    ///   and `user_text` is not the start trigger. Nothing is stored and the
    ///   backend is not called.
    /// - `DomainError::Backend` when the completion call fails. The user turn
    ///   stays committed.
    pub async fn take_turn(&self, room_id: RoomId, user_text: &str) -> Result<String, DomainError> {
        let _room = self.locks.acquire(room_id).await;

        if !self.store.exists(room_id) {
            if !is_start_trigger(user_text) {
                debug!(room_id, "room_missing");
                return Err(DomainError::room_not_found(room_id));
            }
            self.store
                .create(room_id, vec![Turn::system(self.system_prompt.as_ref())])?;
            info!(room_id, "room_started");
        }

        self.store.append(room_id, Turn::user(user_text))?;

        let transcript = self
            .store
            .get(room_id)
            .ok_or_else(|| DomainError::room_not_found(room_id))?;

        let reply = match self.backend.complete(transcript.turns()).await {
            Ok(reply) => reply,
            Err(err) => {
                let detail = err.to_string();
                warn!(room_id, turns = transcript.len(), error = %Redacted(&detail), "backend_failed");
                return Err(err.into());
            }
        };

        self.store.append(room_id, Turn::assistant(reply.as_str()))?;

        let answer = AnswerKind::classify(&reply).map(|kind| kind.as_str());
        info!(
            room_id,
            turns = transcript.len() + 1,
            user_text_len = user_text.chars().count(),
            reply_len = reply.chars().count(),
            answer = answer.unwrap_or("other"),
            "turn_completed"
        );

        if is_termination_signal(&reply) {
            self.store.remove(room_id);
            info!(room_id, turns = transcript.len() + 1, "room_ended");
        }

        Ok(reply)
    }

    /// Snapshot of every room with a game in progress.
    pub fn rooms(&self) -> Vec<RoomView> {
        self.store
            .list()
            .into_iter()
            .map(|(room_id, chat_messages)| RoomView {
                room_id,
                chat_messages,
            })
            .collect()
    }

    pub fn active_rooms(&self) -> usize {
        self.store.len()
    }
}

impl std::fmt::Debug for ConversationOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationOrchestrator")
            .field("active_rooms", &self.store.len())
            .field("locked_rooms", &self.locks.tracked())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::rules::{START_TRIGGER, TERMINATION_MARKER};
    use crate::domain::Role;
    use crate::errors::{BackendErrorKind, NotFoundKind};
    use crate::llm::BackendError;
    use crate::sessions::InMemorySessionStore;
    use crate::test_support::ScriptedBackend;

    fn orchestrator(backend: Arc<ScriptedBackend>) -> (ConversationOrchestrator, Arc<InMemorySessionStore>) {
        let store = Arc::new(InMemorySessionStore::new());
        let orch = ConversationOrchestrator::new(store.clone(), backend).with_system_prompt("rules");
        (orch, store)
    }

    #[tokio::test]
    async fn trigger_on_new_room_seeds_system_turn() {
        let backend = Arc::new(ScriptedBackend::replying(["题目：一个人走进酒吧"]));
        let (orch, store) = orchestrator(backend.clone());

        let reply = orch.take_turn(1, START_TRIGGER).await.unwrap();
        assert_eq!(reply, "题目：一个人走进酒吧");

        let calls = backend.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].roles(), vec![Role::System, Role::User]);
        assert_eq!(calls[0].turns()[0].content(), "rules");

        let transcript = store.get(1).unwrap();
        assert_eq!(
            transcript.roles(),
            vec![Role::System, Role::User, Role::Assistant]
        );
    }

    #[tokio::test]
    async fn trigger_on_active_room_is_an_ordinary_turn() {
        let backend = Arc::new(ScriptedBackend::replying(["题目", "与此无关"]));
        let (orch, store) = orchestrator(backend);

        orch.take_turn(1, START_TRIGGER).await.unwrap();
        orch.take_turn(1, START_TRIGGER).await.unwrap();

        let transcript = store.get(1).unwrap();
        assert_eq!(transcript.count_role(Role::System), 1);
        assert_eq!(transcript.len(), 5);
        assert_eq!(transcript.turns()[3].content(), START_TRIGGER);
    }

    #[tokio::test]
    async fn non_trigger_on_idle_room_is_not_found_without_backend_call() {
        let backend = Arc::new(ScriptedBackend::replying(["unused"]));
        let (orch, store) = orchestrator(backend.clone());

        let err = orch.take_turn(2, "随便").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(NotFoundKind::Room, _)));
        assert!(store.is_empty());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn termination_marker_evicts_room() {
        let backend = Arc::new(ScriptedBackend::replying([
            "题目",
            "游戏结束，答案是：他是理发师。",
        ]));
        let (orch, store) = orchestrator(backend);

        orch.take_turn(1, START_TRIGGER).await.unwrap();
        let reply = orch.take_turn(1, "是").await.unwrap();

        assert!(reply.contains(TERMINATION_MARKER));
        assert!(!store.exists(1));
        assert!(orch.rooms().is_empty());

        let err = orch.take_turn(1, "还有吗").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn room_restarts_fresh_after_game_over() {
        let backend = Arc::new(ScriptedBackend::replying(["游戏结束", "新题目"]));
        let (orch, store) = orchestrator(backend);

        orch.take_turn(1, START_TRIGGER).await.unwrap();
        assert!(!store.exists(1));

        orch.take_turn(1, START_TRIGGER).await.unwrap();
        assert_eq!(store.get(1).unwrap().len(), 3);
    }

    #[tokio::test]
    async fn backend_failure_keeps_dangling_user_turn() {
        let backend = Arc::new(ScriptedBackend::new());
        backend.push_reply("题目");
        backend.push_error(BackendError::Status {
            status: 429,
            body: "quota".into(),
        });
        backend.push_reply("否");
        let (orch, store) = orchestrator(backend.clone());

        orch.take_turn(1, START_TRIGGER).await.unwrap();
        let err = orch.take_turn(1, "是男人吗").await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Backend(BackendErrorKind::Status(429), _)
        ));
        assert_eq!(
            store.get(1).unwrap().roles(),
            vec![Role::System, Role::User, Role::Assistant, Role::User]
        );

        orch.take_turn(1, "是女人吗").await.unwrap();
        assert_eq!(
            store.get(1).unwrap().roles(),
            vec![
                Role::System,
                Role::User,
                Role::Assistant,
                Role::User,
                Role::User,
                Role::Assistant
            ]
        );
        // The orphaned question is part of what the backend saw.
        assert_eq!(backend.calls().last().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn cancelled_backend_call_leaves_user_turn_and_releases_room() {
        let backend = Arc::new(ScriptedBackend::replying(["题目", "是"]));
        let (orch, store) = orchestrator(backend.clone());
        orch.take_turn(1, START_TRIGGER).await.unwrap();

        backend.set_delay(Duration::from_millis(200));
        let cancelled = tokio::time::timeout(Duration::from_millis(20), orch.take_turn(1, "q")).await;
        assert!(cancelled.is_err());
        assert_eq!(store.get(1).unwrap().len(), 4);

        backend.set_delay(Duration::ZERO);
        let reply = tokio::time::timeout(Duration::from_millis(500), orch.take_turn(1, "q2"))
            .await
            .expect("room lock must be released after cancellation");
        assert!(reply.is_ok());
    }

    #[tokio::test]
    async fn listing_exposes_room_views() {
        let backend = Arc::new(ScriptedBackend::replying(["a", "b"]));
        let (orch, _store) = orchestrator(backend);

        orch.take_turn(10, START_TRIGGER).await.unwrap();
        orch.take_turn(20, START_TRIGGER).await.unwrap();

        let mut rooms = orch.rooms();
        rooms.sort_by_key(|r| r.room_id);
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].room_id, 10);
        assert_eq!(rooms[0].chat_messages.len(), 3);
        assert_eq!(orch.active_rooms(), 2);

        let json = serde_json::to_value(&rooms[0]).unwrap();
        assert_eq!(json["roomId"], 10);
        assert_eq!(json["chatMessages"][0]["role"], "system");
    }
}
