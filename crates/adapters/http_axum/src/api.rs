//! JSON controller API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod binding;
#[allow(clippy::missing_errors_doc)]
pub mod onoff;
#[allow(clippy::missing_errors_doc)]
pub mod pairing;

use axum::Json;
use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use serde::Serialize;

use matterhub_app::ports::CommandRunner;
use matterhub_domain::command::CommandOutput;

use crate::state::AppState;

/// Build the controller API router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: CommandRunner + 'static,
{
    Router::new()
        .route("/bind", post(binding::bind::<R>))
        .route("/toggle", post(onoff::toggle::<R>))
        .route("/on", post(onoff::on::<R>))
        .route("/off", post(onoff::off::<R>))
        .route("/pair", post(pairing::pair::<R>))
}

/// Success body shared by every controller endpoint.
#[derive(Serialize)]
struct OkBody {
    status: &'static str,
    output: String,
}

/// Possible successful responses from a controller endpoint.
pub enum CommandResponse {
    /// Raw controller stdout, untouched.
    Ok(CommandOutput),
}

impl IntoResponse for CommandResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(output) => Json(OkBody {
                status: "ok",
                output: output.stdout,
            })
            .into_response(),
        }
    }
}
