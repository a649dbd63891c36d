//! Notification factory for creating test notification entities.

use chrono::Utc;
use entity::sea_orm_active_enums::NotificationType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test notifications with customizable fields.
///
/// Defaults: type `flag_assigned`, unread.
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    flag_id: Uuid,
    kind: NotificationType,
    message: String,
}

impl<'a> NotificationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid, flag_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            flag_id,
            kind: NotificationType::FlagAssigned,
            message: format!("Notification {}", id),
        }
    }

    pub fn kind(mut self, kind: NotificationType) -> Self {
        self.kind = kind;
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Builds and inserts the notification entity into the database.
    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            flag_id: ActiveValue::Set(self.flag_id),
            kind: ActiveValue::Set(self.kind),
            message: ActiveValue::Set(self.message),
            read_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unread notification for the given user and flag.
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: Uuid,
    flag_id: Uuid,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db, user_id, flag_id).build().await
}
