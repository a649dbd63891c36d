//! Workspace factory for creating test workspace entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test workspaces with customizable fields.
///
/// Defaults:
/// - name: `"Workspace {id}"`, integration_type: `"confluence"`
/// - no integration config, not the default workspace
pub struct WorkspaceFactory<'a> {
    db: &'a DatabaseConnection,
    org_id: Uuid,
    name: String,
    integration_type: String,
    integration_config: Option<serde_json::Value>,
    is_default: bool,
}

impl<'a> WorkspaceFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, org_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            org_id,
            name: format!("Workspace {}", id),
            integration_type: "confluence".to_string(),
            integration_config: None,
            is_default: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn integration_type(mut self, integration_type: impl Into<String>) -> Self {
        self.integration_type = integration_type.into();
        self
    }

    pub fn integration_config(mut self, config: serde_json::Value) -> Self {
        self.integration_config = Some(config);
        self
    }

    pub fn is_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    /// Builds and inserts the workspace entity into the database.
    pub async fn build(self) -> Result<entity::workspace::Model, DbErr> {
        entity::workspace::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            org_id: ActiveValue::Set(self.org_id),
            name: ActiveValue::Set(self.name),
            integration_type: ActiveValue::Set(self.integration_type),
            integration_config: ActiveValue::Set(self.integration_config),
            is_default: ActiveValue::Set(self.is_default),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a workspace with default values under the given organization.
pub async fn create_workspace(
    db: &DatabaseConnection,
    org_id: Uuid,
) -> Result<entity::workspace::Model, DbErr> {
    WorkspaceFactory::new(db, org_id).build().await
}
