//! # matterhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **driven port** adapters must implement:
//!   - `CommandRunner` — execute a controller invocation and capture its output
//! - Define the **driving** use-case:
//!   - `ControllerService` — validate a command, log it, run it
//!
//! ## Dependency rule
//! Depends on `matterhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
