//! chip-tool adapter configuration.

use std::time::Duration;

use serde::Deserialize;

/// Configuration for the chip-tool runner.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChipToolConfig {
    /// Controller binary; a bare name is looked up on `PATH`.
    pub program: String,
    /// Kill the controller after this many seconds. Unset means wait forever.
    pub timeout_secs: Option<u64>,
}

impl Default for ChipToolConfig {
    fn default() -> Self {
        Self {
            program: "chip-tool".to_string(),
            timeout_secs: None,
        }
    }
}

impl ChipToolConfig {
    /// Configured deadline, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
