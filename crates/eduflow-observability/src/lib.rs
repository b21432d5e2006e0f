//! # EduFlow Observability
//!
//! Logging setup shared by the EduFlow binaries. Library crates only emit
//! `tracing` events; installing a subscriber is left to the binary.
//!
//! ```no_run
//! eduflow_observability::init_basic_console_logging();
//! tracing::info!("ready");
//! ```

pub mod basic_logging;

pub use basic_logging::{LogFormat, default_directives, init_basic_console_logging};
