//! # matterhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON controller API** (`/bind`, `/toggle`, `/on`, `/off`, `/pair`)
//! - Map HTTP request bodies into application service calls (driving adapter)
//! - Map controller outcomes into HTTP responses:
//!   `200 {"status":"ok","output":…}` or `500 {"status":"error","stderr":…}`
//!
//! ## Dependency rule
//! Depends on `matterhub-app` (for the port trait and service) and
//! `matterhub-domain` (for request value types). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
