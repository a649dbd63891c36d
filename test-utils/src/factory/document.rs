//! Document factory for creating test document entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test documents with customizable fields.
///
/// Defaults:
/// - title: `"Document {id}"`, url: `"https://wiki.example.com/pages/{id}"`
/// - no external id, no owner, never checked
pub struct DocumentFactory<'a> {
    db: &'a DatabaseConnection,
    workspace_id: Uuid,
    title: String,
    url: String,
    external_id: Option<String>,
    owner_id: Option<Uuid>,
}

impl<'a> DocumentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, workspace_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            workspace_id,
            title: format!("Document {}", id),
            url: format!("https://wiki.example.com/pages/{}", id),
            external_id: None,
            owner_id: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    pub fn owner_id(mut self, owner_id: Uuid) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Builds and inserts the document entity into the database.
    pub async fn build(self) -> Result<entity::document::Model, DbErr> {
        entity::document::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            workspace_id: ActiveValue::Set(self.workspace_id),
            title: ActiveValue::Set(self.title),
            url: ActiveValue::Set(self.url),
            external_id: ActiveValue::Set(self.external_id),
            owner_id: ActiveValue::Set(self.owner_id),
            last_checked: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a document with default values in the given workspace.
pub async fn create_document(
    db: &DatabaseConnection,
    workspace_id: Uuid,
) -> Result<entity::document::Model, DbErr> {
    DocumentFactory::new(db, workspace_id).build().await
}
