//! # desk_report: Response Rendering
//!
//! Pure mapping from instrument responses to fixed-structure reports.
//! Headline figures format to 6 decimal places when the server returned a
//! number and pass through verbatim when it returned a diagnostic string;
//! swap NPVs and cashflow amounts format to 2 decimals and discount
//! factors to 6, with cashflow rows kept in server order.
//!
//! Rendering has no side effects and touches no network or terminal state,
//! so every display rule in this crate is testable without either.

pub mod render;
pub mod report;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::render::report;
    pub use crate::report::{EchoRow, Headline, Report, TableSection};
}
