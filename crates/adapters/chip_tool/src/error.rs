//! chip-tool adapter error types.

use std::time::Duration;

use matterhub_domain::error::{CommandError, MatterHubError};

/// Errors specific to running chip-tool.
#[derive(Debug, thiserror::Error)]
pub enum ChipToolError {
    /// The binary could not be started.
    #[error("failed to spawn `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Waiting on the child or reading its pipes failed.
    #[error("failed to wait for controller")]
    Wait(#[source] std::io::Error),

    /// The child exited unsuccessfully.
    #[error("controller exited unsuccessfully")]
    Exited { code: Option<i32>, stderr: String },

    /// The configured timeout elapsed; the child has been killed.
    #[error("controller timed out")]
    TimedOut(Duration),
}

impl From<ChipToolError> for CommandError {
    fn from(err: ChipToolError) -> Self {
        match err {
            ChipToolError::Spawn { source, .. } => Self::Spawn(Box::new(source)),
            ChipToolError::Wait(source) => Self::Io(Box::new(source)),
            ChipToolError::Exited { code, stderr } => Self::Failed { code, stderr },
            ChipToolError::TimedOut(limit) => Self::TimedOut(limit),
        }
    }
}

impl From<ChipToolError> for MatterHubError {
    fn from(err: ChipToolError) -> Self {
        Self::Command(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_program_in_spawn_error() {
        let err = ChipToolError::Spawn {
            program: "chip-tool".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "failed to spawn `chip-tool`");
    }

    #[test]
    fn should_keep_stderr_when_converting_exit_failure() {
        let err: MatterHubError = ChipToolError::Exited {
            code: Some(1),
            stderr: "boom".to_string(),
        }
        .into();
        match err {
            MatterHubError::Command(CommandError::Failed { code, stderr }) => {
                assert_eq!(code, Some(1));
                assert_eq!(stderr, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn should_convert_timeout() {
        let err: MatterHubError = ChipToolError::TimedOut(Duration::from_secs(2)).into();
        assert!(matches!(
            err,
            MatterHubError::Command(CommandError::TimedOut(_))
        ));
    }
}
