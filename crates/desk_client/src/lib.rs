//! # desk_client: Transport and Submission Flow
//!
//! Thin client layer between the validated contract types and the pricing
//! service:
//!
//! - [`config`]: base URL and log level from defaults, TOML file,
//!   environment and CLI overrides,
//! - [`client`]: one [`client::ApiClient`] exposing a typed POST per
//!   instrument over a single JSON transport,
//! - [`submission`]: the per-module `Idle -> Submitting -> {Success,
//!   Failure}` state machine. Failures are logged and swallowed; the
//!   module returns to idle with no displayed result.
//!
//! Modules are independent: each owns its own submission state, and
//! nothing here is shared or cached across instruments.

pub mod client;
pub mod config;
pub mod submission;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::client::ApiClient;
    pub use crate::config::{build_config, CliArgs, ClientConfig, LogLevel};
    pub use crate::submission::{AnyResponse, Submission};
}
