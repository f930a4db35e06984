//! State container for an interactive diagram editor.
//!
//! The interesting part is the undo/redo layer in [`history`], which wraps an
//! arbitrary domain reducer. [`store::configure_store`] wires it together
//! with the loading gate, the UI slices and the side-effect observers.

pub mod action;
pub mod assets;
pub mod config;
pub mod editor;
pub mod history;
pub mod loader;
pub mod loading;
pub mod logging;
pub mod mvi;
pub mod observers;
pub mod script;
pub mod store;
pub mod ui;
