//! JSON handler for commissioning devices.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use matterhub_app::ports::CommandRunner;
use matterhub_domain::node::NodeId;

use super::CommandResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for pairing a device by setup code.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairRequest {
    /// Node id to assign to the commissioned device. Also read as `node_id`.
    #[serde(alias = "node_id")]
    pub node_id: NodeId,
    /// Onboarding payload, e.g. `MT:Y.K90SO527JA0648G00` or a manual code.
    pub code: String,
}

/// `POST /pair`
pub async fn pair<R>(
    State(state): State<AppState<R>>,
    body: Result<Json<PairRequest>, JsonRejection>,
) -> Result<CommandResponse, ApiError>
where
    R: CommandRunner + 'static,
{
    let Json(req) = body?;
    let output = state.controller.pair(req.node_id, req.code).await?;
    Ok(CommandResponse::Ok(output))
}
