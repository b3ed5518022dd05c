//! Shared application state for axum handlers.

use std::sync::Arc;

use matterhub_app::ports::CommandRunner;
use matterhub_app::services::controller_service::ControllerService;

/// Application state shared across all axum handlers.
///
/// Generic over the command runner to avoid dynamic dispatch.
/// `Clone` is implemented manually so the runner itself does not need to be
/// `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Controller use-cases.
    pub controller: Arc<ControllerService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            controller: Arc::clone(&self.controller),
        }
    }
}

impl<R> AppState<R>
where
    R: CommandRunner + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(controller: ControllerService<R>) -> Self {
        Self {
            controller: Arc::new(controller),
        }
    }
}
