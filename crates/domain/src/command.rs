//! Controller commands — what the external controller is asked to do.
//!
//! A [`ControllerCommand`] renders to the argument vector the `chip-tool`
//! CLI expects. Arguments are passed to the process as a discrete list, so
//! caller-supplied values are never interpreted by a shell.

use std::fmt;

use crate::error::{MatterHubError, ValidationError};
use crate::node::{ClusterId, EndpointId, NodeId};

/// Endpoint recorded in a binding entry for the target light.
pub const BINDING_TARGET_ENDPOINT: EndpointId = EndpointId::new(1);

/// On/Off cluster command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnOffAction {
    Toggle,
    On,
    Off,
}

impl OnOffAction {
    /// Command name understood by the controller's `onoff` cluster.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Toggle => "toggle",
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

/// A single invocation of the external controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerCommand {
    /// Write a binding list onto `switch_node` so it drives `light_node`.
    BindingWrite {
        switch_node: NodeId,
        light_node: NodeId,
        endpoint: EndpointId,
        cluster: ClusterId,
    },
    /// Send an On/Off cluster command to `node`.
    OnOff {
        action: OnOffAction,
        node: NodeId,
        endpoint: EndpointId,
    },
    /// Commission `node` using its onboarding setup code.
    Pair { node: NodeId, code: String },
}

impl ControllerCommand {
    /// Check that every node identifier and code is present.
    ///
    /// # Errors
    ///
    /// Returns [`MatterHubError::Validation`] when an identifier or the setup
    /// code is blank.
    pub fn validate(&self) -> Result<(), MatterHubError> {
        match self {
            Self::BindingWrite {
                switch_node,
                light_node,
                ..
            } => {
                if switch_node.is_blank() || light_node.is_blank() {
                    return Err(ValidationError::EmptyNodeId.into());
                }
            }
            Self::OnOff { node, .. } => {
                if node.is_blank() {
                    return Err(ValidationError::EmptyNodeId.into());
                }
            }
            Self::Pair { node, code } => {
                if node.is_blank() {
                    return Err(ValidationError::EmptyNodeId.into());
                }
                if code.trim().is_empty() {
                    return Err(ValidationError::EmptySetupCode.into());
                }
            }
        }
        Ok(())
    }

    /// Arguments passed to the controller binary, in order.
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        match self {
            Self::BindingWrite {
                switch_node,
                light_node,
                endpoint,
                cluster,
            } => vec![
                "binding".to_string(),
                "write".to_string(),
                "binding".to_string(),
                binding_list(light_node, *cluster),
                switch_node.to_string(),
                endpoint.to_string(),
            ],
            Self::OnOff {
                action,
                node,
                endpoint,
            } => vec![
                "onoff".to_string(),
                action.as_str().to_string(),
                node.to_string(),
                endpoint.to_string(),
            ],
            Self::Pair { node, code } => vec![
                "pairing".to_string(),
                "code".to_string(),
                node.to_string(),
                code.clone(),
            ],
        }
    }

    /// Bind the command to a controller binary.
    #[must_use]
    pub fn invocation(&self, program: impl Into<String>) -> Invocation {
        Invocation {
            program: program.into(),
            args: self.args(),
        }
    }
}

/// Binding list literal with a single entry. The node is written unquoted,
/// as the controller's own syntax for node ids.
fn binding_list(light_node: &NodeId, cluster: ClusterId) -> String {
    format!(
        r#"[{{"node":{light_node},"endpoint":{BINDING_TARGET_ENDPOINT},"cluster":{cluster}}}]"#
    )
}

/// Program plus argument vector, ready to be spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for Invocation {
    /// Shell-readable command line, for logs only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_word(f, &self.program)?;
        for arg in &self.args {
            f.write_str(" ")?;
            write_word(f, arg)?;
        }
        Ok(())
    }
}

fn write_word(f: &mut fmt::Formatter<'_>, word: &str) -> fmt::Result {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_.:/,=@+%".contains(c));
    if plain {
        f.write_str(word)
    } else {
        write!(f, "'{}'", word.replace('\'', r"'\''"))
    }
}

/// Captured standard streams of a successful invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}
