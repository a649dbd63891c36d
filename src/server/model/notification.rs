//! Notification domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::NotificationType;
use uuid::Uuid;

use crate::model::notification::NotificationDto;

/// An alert for a user about flag activity. `read_at` stays `None` until the
/// user marks it read.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub flag_id: Uuid,
    pub kind: NotificationType,
    pub message: String,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            flag_id: entity.flag_id,
            kind: entity.kind,
            message: entity.message,
            read_at: entity.read_at,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            user_id: self.user_id,
            flag_id: self.flag_id,
            kind: self.kind,
            message: self.message,
            read_at: self.read_at,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNotificationParam {
    pub user_id: Uuid,
    pub flag_id: Uuid,
    pub kind: NotificationType,
    pub message: String,
}
