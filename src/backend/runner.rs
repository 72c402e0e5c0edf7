//! External zl-config process invocation

use super::BackendError;
use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Future returned by [`CommandRunner::run`].
pub type RunFuture<'a> = Pin<Box<dyn Future<Output = Result<String, BackendError>> + Send + 'a>>;

/// One-shot invocation of the backend CLI.
///
/// Exactly one process per call: no retries, no timeout. Queries are
/// non-critical, so implementations report failure through the `Result`
/// and must never panic.
pub trait CommandRunner: Send + Sync {
    /// Run the backend with `args` and return its trimmed stdout.
    fn run<'a>(&'a self, args: &'a [String]) -> RunFuture<'a>;
}

/// Production runner spawning the configured `zl-config` binary.
pub struct ZlRunner {
    program: String,
}

impl ZlRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl CommandRunner for ZlRunner {
    fn run<'a>(&'a self, args: &'a [String]) -> RunFuture<'a> {
        Box::pin(async move {
            let output = Command::new(&self.program)
                .args(args)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .output()
                .await
                .map_err(BackendError::Spawn)?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
                debug!(
                    "{} {:?} exited with {:?}: {}",
                    self.program,
                    args,
                    output.status.code(),
                    stderr
                );
                return Err(BackendError::Exit {
                    code: output.status.code(),
                    stderr,
                });
            }

            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        })
    }
}
