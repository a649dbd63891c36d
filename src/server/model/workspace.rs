//! Workspace domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::workspace::WorkspaceDto;

/// A named grouping of documents under an organization, tied to one
/// integration type (e.g. "confluence").
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    pub id: Uuid,
    pub org_id: Uuid,
    pub name: String,
    pub integration_type: String,
    /// Opaque integration settings; the service never interprets the shape.
    pub integration_config: Option<serde_json::Value>,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

impl Workspace {
    pub fn from_entity(entity: entity::workspace::Model) -> Self {
        Self {
            id: entity.id,
            org_id: entity.org_id,
            name: entity.name,
            integration_type: entity.integration_type,
            integration_config: entity.integration_config,
            is_default: entity.is_default,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> WorkspaceDto {
        WorkspaceDto {
            id: self.id,
            org_id: self.org_id,
            name: self.name,
            integration_type: self.integration_type,
            integration_config: self.integration_config,
            is_default: self.is_default,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateWorkspaceParam {
    pub org_id: Uuid,
    pub name: String,
    pub integration_type: String,
    pub integration_config: Option<serde_json::Value>,
    pub is_default: bool,
}
