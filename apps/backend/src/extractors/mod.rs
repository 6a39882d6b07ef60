pub mod room_id;
pub mod user_prompt;

pub use room_id::RoomIdParam;
pub use user_prompt::UserPrompt;
