//! Test helpers shared by the backend's integration tests: logging setup,
//! problem-details assertions and unique fixture ids.
//!
//! Nothing here depends on backend types, so unit tests and integration
//! tests can both use it.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
