//! Common error types used across the workspace.
//!
//! There are two failure families: a request that cannot be turned into a
//! controller command ([`ValidationError`]), and a controller invocation that
//! did not succeed ([`CommandError`]). Adapters define their own typed errors
//! and convert into [`MatterHubError`] at the port boundary.

use std::error::Error;
use std::time::Duration;

/// Boxed source error carried across crate boundaries.
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum MatterHubError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("controller command failed")]
    Command(#[from] CommandError),
}

/// A request is missing something a command needs.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("node identifier must not be empty")]
    EmptyNodeId,

    #[error("setup code must not be empty")]
    EmptySetupCode,
}

/// The external controller did not complete successfully.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The process ran and exited with a non-zero status (or was killed by a
    /// signal, in which case `code` is `None`).
    #[error("controller exited with {}", describe_exit(.code))]
    Failed { code: Option<i32>, stderr: String },

    /// The process could not be started at all.
    #[error("failed to launch controller")]
    Spawn(#[source] BoxError),

    /// Waiting on the process or reading its output failed.
    #[error("failed to collect controller output")]
    Io(#[source] BoxError),

    /// The configured deadline elapsed and the process was killed.
    #[error("controller did not finish within {0:?}")]
    TimedOut(Duration),
}

impl CommandError {
    /// Text reported to API clients in the `stderr` field.
    ///
    /// For a process that ran, this is its captured standard error, untouched.
    /// Otherwise it describes why no output was captured.
    #[must_use]
    pub fn stderr(&self) -> String {
        match self {
            Self::Failed { stderr, .. } => stderr.clone(),
            Self::Spawn(source) | Self::Io(source) => format!("{self}: {source}"),
            Self::TimedOut(_) => self.to_string(),
        }
    }
}

#[allow(clippy::ref_option)]
fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}
