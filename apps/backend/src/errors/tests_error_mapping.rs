// Error mapping without HTTP plumbing: DomainError -> AppError -> status/code.
use crate::errors::domain::{BackendErrorKind, DomainError};
use crate::{AppError, ErrorCode};

#[test]
fn maps_missing_room_to_404() {
    let app: AppError = DomainError::room_not_found(2).into();
    assert_eq!(app.code(), ErrorCode::RoomNotFound);
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_conflicts_to_409() {
    let app: AppError = DomainError::room_exists(1).into();
    assert_eq!(app.code().as_str(), "ROOM_EXISTS");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_backend_failures_to_gateway_statuses() {
    let app: AppError = DomainError::backend(BackendErrorKind::Status(500), "boom").into();
    assert_eq!(app.code(), ErrorCode::BackendError);
    assert_eq!(app.status().as_u16(), 502);

    let app: AppError = DomainError::backend(BackendErrorKind::Transport, "refused").into();
    assert_eq!(app.status().as_u16(), 502);

    let app: AppError = DomainError::backend(BackendErrorKind::Timeout, "slow").into();
    assert_eq!(app.code(), ErrorCode::BackendTimeout);
    assert_eq!(app.status().as_u16(), 504);
}

#[test]
fn keeps_detail_text() {
    let app: AppError = DomainError::room_not_found(42).into();
    assert!(app.to_string().contains("room 42"));
}

#[test]
fn config_errors_are_500() {
    let app = AppError::config("LLM_API_KEY must be set");
    assert_eq!(app.code(), ErrorCode::ConfigError);
    assert_eq!(app.status().as_u16(), 500);
}
