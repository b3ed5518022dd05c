//! # matterhub-domain
//!
//! Pure domain model for the matterhub controller bridge.
//!
//! ## Responsibilities
//! - Addressing value types: nodes, endpoints, clusters
//! - Define **controller commands** (binding writes, on/off, pairing) and
//!   render them as argument vectors for the external controller
//! - Define the **error taxonomy** shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Running a command is expressed as a trait in the `app` crate (port).

pub mod error;
pub mod node;

pub mod command;
