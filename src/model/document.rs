use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::flag::FlagDto;

#[derive(Serialize, Deserialize, Clone)]
pub struct DocumentDto {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub title: String,
    pub url: String,
    pub external_id: Option<String>,
    pub owner_id: Option<Uuid>,
    pub last_checked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Body for POST /api/v1/workspaces/{id}/documents.
#[derive(Serialize, Deserialize, Clone)]
pub struct CreateDocumentRequest {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub owner_id: Option<Uuid>,
}

/// Response for GET /api/v1/documents/{id}: the document with its flags.
#[derive(Serialize, Deserialize)]
pub struct DocumentWithFlagsDto {
    pub document: DocumentDto,
    pub flags: Vec<FlagDto>,
}
