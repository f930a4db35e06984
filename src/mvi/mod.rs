//! Unidirectional data flow primitives shared by every slice of the store.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Observers / Subscribers
//!    ↑                                   │
//!    └───────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot owned by exactly one reducer
//! - **Action**: User gestures or system events (loads, saves)
//! - **Reducer**: Pure function that transforms state based on actions
//! - **ReducerTable**: Reducer assembled from per-kind handlers

mod action;
mod reducer;
mod state;
mod table;

pub use action::Action;
pub use reducer::Reducer;
pub use state::SliceState;
pub use table::{Handler, ReducerTable, TableBuilder};
