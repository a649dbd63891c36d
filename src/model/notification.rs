use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::NotificationType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone)]
pub struct NotificationDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub flag_id: Uuid,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub message: String,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize)]
pub struct NotificationListDto {
    pub notifications: Vec<NotificationDto>,
    pub count: usize,
}
