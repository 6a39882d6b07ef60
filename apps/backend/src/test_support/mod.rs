//! In-process doubles shared by unit and integration tests.

pub mod scripted_backend;

pub use scripted_backend::ScriptedBackend;
