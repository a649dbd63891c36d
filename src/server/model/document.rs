//! Document domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::document::DocumentDto;

/// A trackable piece of documentation inside a workspace.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub title: String,
    /// Unique across the whole system.
    pub url: String,
    /// Provider-side identifier (Confluence page id, file path, ...).
    pub external_id: Option<String>,
    pub owner_id: Option<Uuid>,
    pub last_checked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Document {
    pub fn from_entity(entity: entity::document::Model) -> Self {
        Self {
            id: entity.id,
            workspace_id: entity.workspace_id,
            title: entity.title,
            url: entity.url,
            external_id: entity.external_id,
            owner_id: entity.owner_id,
            last_checked: entity.last_checked,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> DocumentDto {
        DocumentDto {
            id: self.id,
            workspace_id: self.workspace_id,
            title: self.title,
            url: self.url,
            external_id: self.external_id,
            owner_id: self.owner_id,
            last_checked: self.last_checked,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDocumentParam {
    pub workspace_id: Uuid,
    pub title: String,
    pub url: String,
    pub external_id: Option<String>,
    pub owner_id: Option<Uuid>,
}
