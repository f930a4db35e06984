//! Sidebar asset catalogue state.

mod reducer;
mod state;

pub use reducer::AssetsReducer;
pub use state::{AssetsState, DEFAULT_TAB};
