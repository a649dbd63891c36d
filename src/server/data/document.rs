//! Document data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::document::{CreateDocumentParam, Document};

pub struct DocumentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateDocumentParam) -> Result<Document, DbErr> {
        let entity = entity::document::ActiveModel::from(Self::row(param))
            .reset_all()
            .insert(self.db)
            .await?;

        Ok(Document::from_entity(entity))
    }

    /// Inserts a batch of documents in one statement.
    ///
    /// Ids are generated client-side, so the inserted rows are returned
    /// without a follow-up query. Returns early on an empty batch.
    ///
    /// # Returns
    /// - `Ok(Vec<Document>)` - The persisted documents
    /// - `Err(DbErr)` - Database error during insert
    pub async fn bulk_create(
        &self,
        params: Vec<CreateDocumentParam>,
    ) -> Result<Vec<Document>, DbErr> {
        if params.is_empty() {
            return Ok(Vec::new());
        }

        let rows: Vec<entity::document::Model> = params.into_iter().map(Self::row).collect();

        let models: Vec<entity::document::ActiveModel> = rows
            .iter()
            .cloned()
            .map(|row| entity::document::ActiveModel::from(row).reset_all())
            .collect();

        entity::prelude::Document::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(rows.into_iter().map(Document::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Document>, DbErr> {
        let entity = entity::prelude::Document::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Document::from_entity))
    }

    pub async fn get_by_url(&self, url: &str) -> Result<Option<Document>, DbErr> {
        let entity = entity::prelude::Document::find()
            .filter(entity::document::Column::Url.eq(url))
            .one(self.db)
            .await?;

        Ok(entity.map(Document::from_entity))
    }

    /// Gets all documents of a workspace, ordered by title.
    pub async fn get_by_workspace_id(&self, workspace_id: Uuid) -> Result<Vec<Document>, DbErr> {
        let entities = entity::prelude::Document::find()
            .filter(entity::document::Column::WorkspaceId.eq(workspace_id))
            .order_by_asc(entity::document::Column::Title)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Document::from_entity).collect())
    }

    /// Stamps the document's `last_checked` column with the current time.
    ///
    /// # Returns
    /// - `Ok(())` - Timestamp updated (or no matching document found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_last_checked(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Document::update_many()
            .filter(entity::document::Column::Id.eq(id))
            .col_expr(
                entity::document::Column::LastChecked,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    fn row(param: CreateDocumentParam) -> entity::document::Model {
        entity::document::Model {
            id: Uuid::new_v4(),
            workspace_id: param.workspace_id,
            title: param.title,
            url: param.url,
            external_id: param.external_id,
            owner_id: param.owner_id,
            last_checked: None,
            created_at: Utc::now(),
        }
    }
}
