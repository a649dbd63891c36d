//! Flag domain models, filters, and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{FlagPriority, FlagStatus};
use uuid::Uuid;

use crate::{
    model::flag::FlagDto,
    server::model::{document::Document, user::User},
};

/// A reported issue against a document, with priority/status/assignment.
///
/// The related entities are populated by the repository on eager lookups and
/// left `None` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Flag {
    pub id: Uuid,
    pub document_id: Uuid,
    pub created_by: Uuid,
    pub assigned_to: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub priority: FlagPriority,
    pub status: FlagStatus,
    pub resolution: Option<String>,
    /// Set exactly while the flag is in the resolved status.
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub creator: Option<User>,
    pub assignee: Option<User>,
    pub document: Option<Document>,
}

impl Flag {
    pub fn from_entity(entity: entity::flag::Model) -> Self {
        Self {
            id: entity.id,
            document_id: entity.document_id,
            created_by: entity.created_by,
            assigned_to: entity.assigned_to,
            title: entity.title,
            description: entity.description,
            priority: entity.priority,
            status: entity.status,
            resolution: entity.resolution,
            resolved_at: entity.resolved_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            creator: None,
            assignee: None,
            document: None,
        }
    }

    pub fn into_dto(self) -> FlagDto {
        FlagDto {
            id: self.id,
            document_id: self.document_id,
            created_by: self.created_by,
            assigned_to: self.assigned_to,
            title: self.title,
            description: self.description,
            priority: self.priority,
            status: self.status,
            resolution: self.resolution,
            resolved_at: self.resolved_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
            creator: self.creator.map(User::into_dto),
            assignee: self.assignee.map(User::into_dto),
            document: self.document.map(Document::into_dto),
        }
    }
}

/// Parameters for creating a flag against a document.
#[derive(Debug, Clone)]
pub struct CreateFlagParam {
    pub document_id: Uuid,
    pub created_by: Uuid,
    pub assigned_to: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub priority: FlagPriority,
    pub status: FlagStatus,
}

/// Partial update for a flag. Absent fields leave the stored value unchanged;
/// `resolved_at` is derived from the status transition by the service.
#[derive(Debug, Clone, Default)]
pub struct UpdateFlagParam {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<FlagPriority>,
    pub status: Option<FlagStatus>,
    pub assigned_to: Option<Uuid>,
    pub resolution: Option<String>,
}

/// Optional predicates combined with AND by the repository. `None` fields add
/// no condition.
#[derive(Debug, Clone, Default)]
pub struct FlagFilters {
    pub workspace_id: Option<Uuid>,
    pub status: Option<FlagStatus>,
    pub priority: Option<FlagPriority>,
    pub assigned_to: Option<Uuid>,
    pub created_by: Option<Uuid>,
    /// Case-insensitive substring matched against title OR description.
    pub search: Option<String>,
}
