//! Error handling for the riddle backend.

pub mod domain;
pub mod error_code;

pub use domain::{BackendErrorKind, ConflictKind, DomainError, NotFoundKind};
pub use error_code::ErrorCode;

#[cfg(test)]
mod tests_error_mapping;
