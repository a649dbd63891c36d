//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations
//! (CRUD) for each domain in the application. Repositories use SeaORM entity
//! models internally and return domain models to maintain separation between
//! the data layer and business logic layer. Lookup misses surface as
//! `Ok(None)` here; services decide whether that is a `NotFound`.

pub mod document;
pub mod flag;
pub mod notification;
pub mod organization;
pub mod user;
pub mod workspace;

#[cfg(test)]
mod test;
