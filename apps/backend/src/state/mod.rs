pub mod app_state;
pub mod builder;

pub use app_state::AppState;
pub use builder::{build_state, StateBuilder, ERR_MISSING_BACKEND};
