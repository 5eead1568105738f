//! # Desk TUI
//!
//! Terminal front end for the pricing desk client.
//!
//! Nine instrument screens share one layout: an instrument selector on the
//! left, the active module's form on the right, and the latest report
//! below it. Each module owns its form, its field errors and its
//! submission state; switching screens neither cancels another module's
//! in-flight request nor carries its result across.
//!
//! Uses ratatui for rendering and crossterm for terminal handling.

pub mod app;
pub mod screens;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::TuiApp;
}
