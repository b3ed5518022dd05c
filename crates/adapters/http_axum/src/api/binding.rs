//! JSON handler for writing bindings.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use matterhub_app::ports::CommandRunner;
use matterhub_domain::node::{ClusterId, EndpointId, NodeId};

use super::CommandResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for binding a switch to a light.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindRequest {
    /// Device whose binding table is written.
    pub switch_node: NodeId,
    /// Device the switch will control.
    pub light_node: NodeId,
    /// Endpoint on the switch; defaults to 1.
    #[serde(default)]
    pub endpoint: EndpointId,
    /// Cluster to bind; defaults to On/Off (6).
    #[serde(default)]
    pub cluster: ClusterId,
}

/// `POST /bind`
pub async fn bind<R>(
    State(state): State<AppState<R>>,
    body: Result<Json<BindRequest>, JsonRejection>,
) -> Result<CommandResponse, ApiError>
where
    R: CommandRunner + 'static,
{
    let Json(req) = body?;
    let output = state
        .controller
        .bind(req.switch_node, req.light_node, req.endpoint, req.cluster)
        .await?;
    Ok(CommandResponse::Ok(output))
}
