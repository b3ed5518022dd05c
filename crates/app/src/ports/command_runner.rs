//! Command runner port — executes the external controller.

use std::future::Future;

use matterhub_domain::command::{CommandOutput, Invocation};
use matterhub_domain::error::MatterHubError;

/// Runs a controller [`Invocation`] to completion.
///
/// Implementations report success only when the process started and exited
/// with status zero. Any other outcome is a
/// [`MatterHubError::Command`](matterhub_domain::error::MatterHubError::Command).
pub trait CommandRunner: Send + Sync {
    /// Path or name of the controller binary.
    fn program(&self) -> &str;

    /// Spawn the process, wait for it, and capture both standard streams.
    fn run(
        &self,
        invocation: Invocation,
    ) -> impl Future<Output = Result<CommandOutput, MatterHubError>> + Send;
}
