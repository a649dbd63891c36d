//! Request and response types for the HTTP API.
//!
//! These DTOs define the JSON surface of the service. Domain models are
//! converted into DTOs at the controller boundary; request DTOs are converted
//! into operation parameters before reaching the service layer.

pub mod api;
pub mod confluence;
pub mod document;
pub mod flag;
pub mod notification;
pub mod organization;
pub mod user;
pub mod workspace;
