//! JSON handlers for the On/Off cluster.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use matterhub_app::ports::CommandRunner;
use matterhub_domain::command::OnOffAction;
use matterhub_domain::node::{EndpointId, NodeId};

use super::CommandResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `/toggle`, `/on` and `/off`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnOffRequest {
    pub node_id: NodeId,
    /// Defaults to 1.
    #[serde(default)]
    pub endpoint: EndpointId,
}

/// `POST /toggle`
pub async fn toggle<R>(
    State(state): State<AppState<R>>,
    body: Result<Json<OnOffRequest>, JsonRejection>,
) -> Result<CommandResponse, ApiError>
where
    R: CommandRunner + 'static,
{
    send(&state, OnOffAction::Toggle, body?).await
}

/// `POST /on`
pub async fn on<R>(
    State(state): State<AppState<R>>,
    body: Result<Json<OnOffRequest>, JsonRejection>,
) -> Result<CommandResponse, ApiError>
where
    R: CommandRunner + 'static,
{
    send(&state, OnOffAction::On, body?).await
}

/// `POST /off`
pub async fn off<R>(
    State(state): State<AppState<R>>,
    body: Result<Json<OnOffRequest>, JsonRejection>,
) -> Result<CommandResponse, ApiError>
where
    R: CommandRunner + 'static,
{
    send(&state, OnOffAction::Off, body?).await
}

async fn send<R>(
    state: &AppState<R>,
    action: OnOffAction,
    Json(req): Json<OnOffRequest>,
) -> Result<CommandResponse, ApiError>
where
    R: CommandRunner + 'static,
{
    let output = state
        .controller
        .on_off(action, req.node_id, req.endpoint)
        .await?;
    Ok(CommandResponse::Ok(output))
}
