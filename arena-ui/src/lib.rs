//! arena-ui - Shared UI state and layout components for the organizer area
//!
//! Contains the stores (preferences, UI state, root composition), the pure
//! layout derivation, and the props-based views the web app renders.

pub mod components;
pub mod error;
pub mod hooks;
pub mod stores;
#[cfg(test)]
mod test_support;
#[cfg(target_arch = "wasm32")]
pub mod wasm_utils;

pub use components::*;
pub use error::PreferenceError;
pub use hooks::*;
pub use stores::*;
