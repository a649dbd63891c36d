//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity rows at the repository boundary
//! and transformed to DTOs at the controller boundary. Parameter structs
//! carry the inputs of individual repository and service operations.

pub mod confluence;
pub mod document;
pub mod flag;
pub mod notification;
pub mod organization;
pub mod user;
pub mod workspace;
