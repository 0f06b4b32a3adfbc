//! Logging setup.
//!
//! The engine only emits through the `log` facade; binaries pick the backend
//! by calling [`init_logging`] early in `main`.

mod init;

pub use init::{init_logging, LoggingConfig};
