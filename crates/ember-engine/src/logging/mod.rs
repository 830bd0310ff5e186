//! Logging setup.
//!
//! Everything in the workspace logs through the `log` facade; this module only owns
//! the one-time `env_logger` installation used by binaries.

mod init;

pub use init::{init_logging, LoggingConfig};
