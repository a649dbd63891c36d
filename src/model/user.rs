use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone)]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub org_id: Uuid,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Body for POST /api/v1/orgs/{id}/users.
#[derive(Serialize, Deserialize, Clone)]
pub struct AddUserRequest {
    pub email: String,
    pub name: String,
    pub role: Option<UserRole>,
}
