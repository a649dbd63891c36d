//! Flag factory for creating test flag entities.

use chrono::Utc;
use entity::sea_orm_active_enums::{FlagPriority, FlagStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test flags with customizable fields.
///
/// Defaults:
/// - title: `"Flag {id}"`, description: a sentence long enough to pass
///   service validation
/// - priority: medium, status: pending, unassigned, unresolved
pub struct FlagFactory<'a> {
    db: &'a DatabaseConnection,
    document_id: Option<Uuid>,
    created_by: Option<Uuid>,
    assigned_to: Option<Uuid>,
    title: String,
    description: String,
    priority: FlagPriority,
    status: FlagStatus,
}

impl<'a> FlagFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            document_id: None,
            created_by: None,
            assigned_to: None,
            title: format!("Flag {}", id),
            description: format!("This documentation issue {} needs attention.", id),
            priority: FlagPriority::Medium,
            status: FlagStatus::Pending,
        }
    }

    pub fn document_id(mut self, document_id: Uuid) -> Self {
        self.document_id = Some(document_id);
        self
    }

    pub fn created_by(mut self, created_by: Uuid) -> Self {
        self.created_by = Some(created_by);
        self
    }

    pub fn assigned_to(mut self, assigned_to: Uuid) -> Self {
        self.assigned_to = Some(assigned_to);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn priority(mut self, priority: FlagPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn status(mut self, status: FlagStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the flag entity into the database.
    ///
    /// Creates the document (with its organization and workspace) and the
    /// creator user when they were not provided.
    pub async fn build(self) -> Result<entity::flag::Model, DbErr> {
        let (document_id, created_by) = match (self.document_id, self.created_by) {
            (Some(document_id), Some(created_by)) => (document_id, created_by),
            (document_id, created_by) => {
                let org = super::organization::create_organization(self.db).await?;
                let document_id = match document_id {
                    Some(id) => id,
                    None => {
                        let workspace = super::workspace::create_workspace(self.db, org.id).await?;
                        super::document::create_document(self.db, workspace.id).await?.id
                    }
                };
                let created_by = match created_by {
                    Some(id) => id,
                    None => super::user::create_user(self.db, org.id).await?.id,
                };
                (document_id, created_by)
            }
        };

        let now = Utc::now();
        entity::flag::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            document_id: ActiveValue::Set(document_id),
            created_by: ActiveValue::Set(created_by),
            assigned_to: ActiveValue::Set(self.assigned_to),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            priority: ActiveValue::Set(self.priority),
            status: ActiveValue::Set(self.status),
            resolution: ActiveValue::Set(None),
            resolved_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a flag with default values, including its dependency chain.
pub async fn create_flag(db: &DatabaseConnection) -> Result<entity::flag::Model, DbErr> {
    FlagFactory::new(db).build().await
}
