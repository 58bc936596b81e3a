//! Store types for UI state management
//!
//! The UI store is the single source of truth for presentation state shared
//! by the navbar, side navigation and main content. It is constructed once by
//! the composition root and handed down through context, never reached as a
//! global.

pub mod app;
pub mod auth;
pub mod notifications;
pub mod preferences;
pub mod ui;
pub mod ui_store;

pub use app::*;
pub use auth::*;
pub use notifications::*;
pub use preferences::*;
pub use ui::*;
pub use ui_store::*;
