//! Start/termination rules of the guessing game.
//!
//! These literals are shared with the prompt the backend receives, so they
//! have to stay byte-for-byte identical to what the prompt tells the model.

/// User input that opens a new game in a room with no active session.
pub const START_TRIGGER: &str = "开始";

/// Substring in a backend reply that ends the game and discards the room.
pub const TERMINATION_MARKER: &str = "游戏结束";

/// True only for the exact trigger literal; surrounding whitespace or extra
/// characters make it an ordinary message.
pub fn is_start_trigger(user_text: &str) -> bool {
    user_text == START_TRIGGER
}

/// True when the reply contains the termination marker anywhere.
pub fn is_termination_signal(reply: &str) -> bool {
    reply.contains(TERMINATION_MARKER)
}

/// The three answers the game master is allowed to give to a question.
///
/// Enforcement is left to the prompt; this only classifies replies for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind {
    Yes,
    No,
    Irrelevant,
}

impl AnswerKind {
    pub const ALL: [AnswerKind; 3] = [AnswerKind::Irrelevant, AnswerKind::Yes, AnswerKind::No];

    pub const fn literal(&self) -> &'static str {
        match self {
            AnswerKind::Yes => "是",
            AnswerKind::No => "否",
            AnswerKind::Irrelevant => "与此无关",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            AnswerKind::Yes => "yes",
            AnswerKind::No => "no",
            AnswerKind::Irrelevant => "irrelevant",
        }
    }

    /// Recognize a reply that leads with one of the permitted answers.
    ///
    /// The answer may be followed by punctuation and a short hint
    /// ("是，你离真相更近了"), but not by more word characters.
    pub fn classify(reply: &str) -> Option<Self> {
        let reply = reply.trim();
        Self::ALL.into_iter().find(|kind| {
            reply
                .strip_prefix(kind.literal())
                .is_some_and(|rest| rest.chars().next().map_or(true, is_answer_boundary))
        })
    }
}

fn is_answer_boundary(c: char) -> bool {
    c.is_whitespace() || matches!(c, '，' | ',' | '。' | '.' | '！' | '!' | '；' | ';' | '～' | '~')
}
