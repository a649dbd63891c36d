//! HTTP request handlers.
//!
//! Handlers decode and validate the request, call exactly one service
//! method, and convert the returned domain model into a DTO. Error mapping
//! to status codes lives on `AppError`'s `IntoResponse` implementation.

pub mod confluence;
pub mod document;
pub mod flag;
pub mod notification;
pub mod organization;
pub mod workspace;
