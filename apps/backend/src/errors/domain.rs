//! Domain-level error type used by the session store and the orchestrator.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! through `From<DomainError> for AppError`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Room,
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    RoomExists,
}

/// How the completion backend failed
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BackendErrorKind {
    Transport,
    Timeout,
    Status(u16),
    Decode,
    EmptyReply,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// The completion backend could not produce a reply
    Backend(BackendErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Backend(kind, d) => write!(f, "backend {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn backend(kind: BackendErrorKind, detail: impl Into<String>) -> Self {
        Self::Backend(kind, detail.into())
    }

    pub fn room_not_found(room_id: i64) -> Self {
        Self::not_found(
            NotFoundKind::Room,
            format!("No game in progress for room {room_id}"),
        )
    }

    pub fn room_exists(room_id: i64) -> Self {
        Self::conflict(
            ConflictKind::RoomExists,
            format!("Room {room_id} already has a transcript"),
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(..))
    }
}
