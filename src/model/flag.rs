use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{FlagPriority, FlagStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{document::DocumentDto, user::UserDto};

#[derive(Serialize, Deserialize, Clone)]
pub struct FlagDto {
    pub id: Uuid,
    pub document_id: Uuid,
    pub created_by: Uuid,
    pub assigned_to: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub priority: FlagPriority,
    pub status: FlagStatus,
    pub resolution: Option<String>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<UserDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<UserDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<DocumentDto>,
}

/// Body for POST /api/v1/documents/{id}/flags. `created_by` identifies the
/// caller raising the flag.
#[derive(Serialize, Deserialize, Clone)]
pub struct CreateFlagRequest {
    pub title: String,
    pub description: String,
    pub created_by: Uuid,
    #[serde(default)]
    pub priority: Option<FlagPriority>,
    #[serde(default)]
    pub assigned_to: Option<Uuid>,
}

/// Body for PATCH /api/v1/flags/{id}. Absent fields are left unchanged.
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct UpdateFlagRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<FlagPriority>,
    #[serde(default)]
    pub status: Option<FlagStatus>,
    #[serde(default)]
    pub assigned_to: Option<Uuid>,
    #[serde(default)]
    pub resolution: Option<String>,
}

/// Query string for GET /api/v1/flags.
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct FlagFilterQuery {
    #[serde(default)]
    pub workspace_id: Option<Uuid>,
    #[serde(default)]
    pub status: Option<FlagStatus>,
    #[serde(default)]
    pub priority: Option<FlagPriority>,
    #[serde(default)]
    pub assigned_to: Option<Uuid>,
    #[serde(default)]
    pub created_by: Option<Uuid>,
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct FlagListDto {
    pub flags: Vec<FlagDto>,
    pub count: usize,
}
