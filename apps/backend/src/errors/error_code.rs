//! Error codes for the riddle backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the HTTP API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Room id in the path is not an integer
    InvalidRoomId,
    /// `userPrompt` query parameter missing or malformed
    InvalidPrompt,

    // Resource Not Found
    /// No game in progress for the room
    RoomNotFound,

    // Conflicts
    /// Room already has a transcript
    RoomExists,

    // Upstream
    /// Completion backend failed
    BackendError,
    /// Completion backend did not answer in time
    BackendTimeout,

    // System Errors
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidRoomId => "INVALID_ROOM_ID",
            Self::InvalidPrompt => "INVALID_PROMPT",

            Self::RoomNotFound => "ROOM_NOT_FOUND",

            Self::RoomExists => "ROOM_EXISTS",

            Self::BackendError => "BACKEND_ERROR",
            Self::BackendTimeout => "BACKEND_TIMEOUT",

            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
