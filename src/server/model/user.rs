//! User domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;
use uuid::Uuid;

use crate::model::user::UserDto;

/// A person with access to an organization's workspaces.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    /// Unique across the whole system, not just the organization.
    pub email: String,
    pub name: String,
    pub org_id: Uuid,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            org_id: entity.org_id,
            role: entity.role,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            org_id: self.org_id,
            role: self.role,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a user under an organization.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub name: String,
    pub org_id: Uuid,
    pub role: UserRole,
}

/// Parameters for adding a member to an existing organization. A missing
/// role defaults to `member`.
#[derive(Debug, Clone)]
pub struct AddUserParam {
    pub org_id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Option<UserRole>,
}
