//! Controller service — use-cases for driving the external controller.

use matterhub_domain::command::{CommandOutput, ControllerCommand, OnOffAction};
use matterhub_domain::error::MatterHubError;
use matterhub_domain::node::{ClusterId, EndpointId, NodeId};

use crate::ports::CommandRunner;

/// Application service that turns requests into controller invocations.
///
/// Holds no state besides the runner; concurrent calls are independent.
pub struct ControllerService<R> {
    runner: R,
}

impl<R: CommandRunner> ControllerService<R> {
    /// Create a new service backed by the given runner.
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Bind `switch_node` to `light_node` on the given cluster.
    ///
    /// # Errors
    ///
    /// Returns [`MatterHubError::Validation`] if a node id is blank, or
    /// [`MatterHubError::Command`] if the controller fails.
    #[tracing::instrument(skip(self))]
    pub async fn bind(
        &self,
        switch_node: NodeId,
        light_node: NodeId,
        endpoint: EndpointId,
        cluster: ClusterId,
    ) -> Result<CommandOutput, MatterHubError> {
        self.execute(ControllerCommand::BindingWrite {
            switch_node,
            light_node,
            endpoint,
            cluster,
        })
        .await
    }

    /// Send an On/Off cluster command.
    ///
    /// # Errors
    ///
    /// Returns [`MatterHubError::Validation`] if the node id is blank, or
    /// [`MatterHubError::Command`] if the controller fails.
    #[tracing::instrument(skip(self))]
    pub async fn on_off(
        &self,
        action: OnOffAction,
        node: NodeId,
        endpoint: EndpointId,
    ) -> Result<CommandOutput, MatterHubError> {
        self.execute(ControllerCommand::OnOff {
            action,
            node,
            endpoint,
        })
        .await
    }

    /// Commission a device with its setup code.
    ///
    /// # Errors
    ///
    /// Returns [`MatterHubError::Validation`] if the node id or code is
    /// blank, or [`MatterHubError::Command`] if the controller fails.
    #[tracing::instrument(skip(self, code))]
    pub async fn pair(&self, node: NodeId, code: String) -> Result<CommandOutput, MatterHubError> {
        self.execute(ControllerCommand::Pair { node, code }).await
    }

    /// Validate, log, and run a command.
    async fn execute(
        &self,
        command: ControllerCommand,
    ) -> Result<CommandOutput, MatterHubError> {
        command.validate()?;
        let invocation = command.invocation(self.runner.program());
        tracing::info!(command = %invocation, "running controller command");
        match self.runner.run(invocation).await {
            Ok(output) => Ok(output),
            Err(err) => {
                tracing::warn!(error = %err, "controller command failed");
                Err(err)
            }
        }
    }
}
