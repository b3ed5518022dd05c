//! Application services (use-cases).

pub mod controller_service;
