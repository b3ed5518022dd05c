//! # matterhub-adapter-chip-tool
//!
//! Runs the Matter reference controller (`chip-tool`) as a subprocess.
//!
//! Each invocation spawns a fresh process with a discrete argument list, no
//! shell in between, and waits for it to exit while the caller's task is
//! suspended. Standard output and standard error are captured in full.
//!
//! Without a configured timeout the runner waits indefinitely, and a caller
//! that goes away does not stop a process that has already started. With a
//! timeout the child is killed once the deadline passes.
//!
//! ## Dependency rule
//!
//! Depends on `matterhub-app` (port traits) and `matterhub-domain` only.

pub mod config;
pub mod error;

use std::process::Stdio;

use matterhub_app::ports::CommandRunner;
use matterhub_domain::command::{CommandOutput, Invocation};
use matterhub_domain::error::MatterHubError;
use tokio::process::Command;

pub use config::ChipToolConfig;
pub use error::ChipToolError;

/// [`CommandRunner`] backed by `tokio::process`.
#[derive(Debug, Clone, Default)]
pub struct ChipToolRunner {
    config: ChipToolConfig,
}

impl ChipToolRunner {
    /// Create a runner from its configuration.
    #[must_use]
    pub fn new(config: ChipToolConfig) -> Self {
        Self { config }
    }

    async fn spawn_and_wait(&self, invocation: Invocation) -> Result<CommandOutput, ChipToolError> {
        let timeout = self.config.timeout();

        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(timeout.is_some());

        let child = command.spawn().map_err(|source| ChipToolError::Spawn {
            program: invocation.program.clone(),
            source,
        })?;
        tracing::debug!(pid = ?child.id(), "controller spawned");

        let output = match timeout {
            None => child.wait_with_output().await,
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| ChipToolError::TimedOut(limit))?,
        }
        .map_err(ChipToolError::Wait)?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(ChipToolError::Exited {
                code: output.status.code(),
                stderr,
            });
        }

        tracing::debug!(stdout_len = stdout.len(), "controller finished");
        Ok(CommandOutput { stdout, stderr })
    }
}

impl CommandRunner for ChipToolRunner {
    fn program(&self) -> &str {
        &self.config.program
    }

    async fn run(&self, invocation: Invocation) -> Result<CommandOutput, MatterHubError> {
        Ok(self.spawn_and_wait(invocation).await?)
    }
}
