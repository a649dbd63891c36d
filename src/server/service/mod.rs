//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository)
//! layer. They own validation, wrap repository lookup misses into `NotFound`
//! errors, and coordinate multi-step operations across repositories and the
//! Confluence provider client.

pub mod confluence;
pub mod document;
pub mod flag;
pub mod notification;
pub mod organization;
pub mod workspace;
