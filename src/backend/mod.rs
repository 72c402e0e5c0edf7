//! Backend module - zl-config invocation and status parsing

pub mod commands;
pub mod parser;
pub mod runner;

pub use runner::{CommandRunner, RunFuture, ZlRunner};

use thiserror::Error;

/// Failure of a single backend invocation.
///
/// Both variants mean "no data": the daemon being stopped or the binary
/// missing is a common, valid condition here, so callers log at debug
/// level and fall back to default state instead of propagating.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The zl-config process could not be spawned
    #[error("failed to spawn backend: {0}")]
    Spawn(#[from] std::io::Error),

    /// The process ran but exited with a non-zero status
    #[error("backend exited with status {code:?}: {stderr}")]
    Exit {
        code: Option<i32>,
        stderr: String,
    },
}
