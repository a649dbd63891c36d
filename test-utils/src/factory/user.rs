//! User factory for creating test user entities.

use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test users with customizable fields.
///
/// Defaults:
/// - email: `"user{id}@example.com"`, name: `"User {id}"`
/// - role: member, active
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    name: String,
    org_id: Uuid,
    role: UserRole,
    is_active: bool,
}

impl<'a> UserFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, org_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            name: format!("User {}", id),
            org_id,
            role: UserRole::Member,
            is_active: true,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the user entity into the database.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            org_id: ActiveValue::Set(self.org_id),
            role: ActiveValue::Set(self.role),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active member user under the given organization.
pub async fn create_user(
    db: &DatabaseConnection,
    org_id: Uuid,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, org_id).build().await
}
