//! Logging for unit tests, installed once per test binary by the `ctor`
//! hook in `lib.rs`.
//!
//! Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`:
//!
//! ```bash
//! TEST_LOG=riddle_backend=debug cargo test -p riddle-backend services::
//! ```

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INSTALLED: OnceCell<()> = OnceCell::new();

pub fn init() {
    INSTALLED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // Another harness may have installed a subscriber already.
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(true)
            .try_init();
    });
}
