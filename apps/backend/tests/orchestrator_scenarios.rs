// End-to-end game scenarios against the orchestrator, with an in-memory
// store and a scripted completion backend.
//
//   cargo test --test orchestrator_scenarios

mod common;

use std::sync::Arc;

use riddle_backend::domain::rules::{START_TRIGGER, TERMINATION_MARKER};
use riddle_backend::domain::Role;
use riddle_backend::errors::{DomainError, NotFoundKind};
use riddle_backend::test_support::ScriptedBackend;
use riddle_backend::{ConversationOrchestrator, InMemorySessionStore, SessionStore};

struct Harness {
    store: Arc<InMemorySessionStore>,
    backend: Arc<ScriptedBackend>,
    orchestrator: ConversationOrchestrator,
}

fn harness() -> Harness {
    let store = Arc::new(InMemorySessionStore::new());
    let backend = Arc::new(ScriptedBackend::new());
    let orchestrator = ConversationOrchestrator::new(store.clone(), backend.clone());
    Harness {
        store,
        backend,
        orchestrator,
    }
}

#[tokio::test]
async fn full_game_in_room_one() {
    let h = harness();
    let puzzle = "汤面：一个人走进餐厅，点了一碗海龟汤，喝了一口就自杀了。";
    h.backend.push_reply(puzzle);
    h.backend
        .push_reply("游戏结束，答案是：他曾在海难中被骗吃过人肉。");

    // Start: the room persists with [system, user, assistant].
    let reply = h.orchestrator.take_turn(1, START_TRIGGER).await.unwrap();
    assert_eq!(reply, puzzle);

    let transcript = h.store.get(1).expect("room 1 is live");
    assert_eq!(
        transcript.roles(),
        vec![Role::System, Role::User, Role::Assistant]
    );
    assert_eq!(transcript.turns()[1].content(), START_TRIGGER);
    assert_eq!(transcript.turns()[2].content(), puzzle);

    // Solved: the reply carries the marker, so the room is evicted.
    let reply = h.orchestrator.take_turn(1, "是").await.unwrap();
    assert!(reply.contains(TERMINATION_MARKER));
    assert!(h.store.get(1).is_none());
    assert!(h.orchestrator.rooms().iter().all(|r| r.room_id != 1));

    // The backend saw the whole transcript on the second call.
    let calls = h.backend.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[1].roles(),
        vec![Role::System, Role::User, Role::Assistant, Role::User]
    );
    assert_eq!(calls[1].last().map(|t| t.content()), Some("是"));

    // After the game a plain message hits the missing-session path.
    let err = h.orchestrator.take_turn(1, "再来").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(h.backend.call_count(), 2);
}

#[tokio::test]
async fn uninitialized_room_rejects_plain_text() {
    let h = harness();
    h.backend.push_reply("never sent");

    let err = h.orchestrator.take_turn(2, "随便").await.unwrap_err();

    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Room, _)));
    assert!(h.store.is_empty());
    assert_eq!(h.backend.call_count(), 0);
}

#[tokio::test]
async fn near_miss_triggers_do_not_start_a_game() {
    let h = harness();

    for text in [" 开始", "开始 ", "开始游戏", "start", ""] {
        let err = h.orchestrator.take_turn(3, text).await.unwrap_err();
        assert!(err.is_not_found(), "{text:?} must not start a game");
    }
    assert!(h.store.is_empty());
    assert_eq!(h.backend.call_count(), 0);
}

#[tokio::test]
async fn marker_anywhere_in_reply_ends_the_game() {
    let h = harness();
    h.backend.push_reply("题目");
    h.backend.push_reply("恭喜你！本轮游戏结束。");

    h.orchestrator.take_turn(4, START_TRIGGER).await.unwrap();
    h.orchestrator.take_turn(4, "他是医生吗").await.unwrap();

    assert!(!h.store.exists(4));
}

#[tokio::test]
async fn rooms_are_isolated() {
    let h = harness();
    h.backend.push_reply("题目A");
    h.backend.push_reply("题目B");
    h.backend.push_reply("游戏结束");

    h.orchestrator.take_turn(10, START_TRIGGER).await.unwrap();
    h.orchestrator.take_turn(11, START_TRIGGER).await.unwrap();
    h.orchestrator.take_turn(10, "放弃").await.unwrap();

    assert!(!h.store.exists(10));
    let other = h.store.get(11).expect("room 11 untouched");
    assert_eq!(other.len(), 3);
    assert_eq!(other.turns()[2].content(), "题目B");
}

#[tokio::test]
async fn long_game_keeps_strict_alternation() {
    let h = harness();
    h.backend.push_reply("题目");
    let questions = ["是人吗", "是男人吗", "在室内吗", "和水有关吗", "是夜里吗"];
    for answer in ["是", "否", "与此无关", "是", "否"] {
        h.backend.push_reply(answer);
    }

    h.orchestrator.take_turn(5, START_TRIGGER).await.unwrap();
    for q in questions {
        h.orchestrator.take_turn(5, q).await.unwrap();
    }

    let transcript = h.store.get(5).unwrap();
    assert_eq!(transcript.len(), 1 + 2 * (1 + questions.len()));
    assert_eq!(transcript.count_role(Role::System), 1);
    for (i, turn) in transcript.turns().iter().enumerate().skip(1) {
        let expected = if i % 2 == 1 { Role::User } else { Role::Assistant };
        assert_eq!(turn.role(), expected, "turn {i}");
    }
    assert_eq!(transcript.last().map(|t| t.content()), Some("否"));
}
