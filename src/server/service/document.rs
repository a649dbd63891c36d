//! Document service for business logic.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        document::DocumentRepository, flag::FlagRepository, user::UserRepository,
        workspace::WorkspaceRepository,
    },
    error::AppError,
    model::{
        document::{CreateDocumentParam, Document},
        flag::Flag,
    },
};

pub struct DocumentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attaches a document to an existing workspace.
    ///
    /// URL uniqueness is checked before the insert (check-then-create).
    ///
    /// # Returns
    /// - `Ok(Document)` - The created document
    /// - `Err(AppError::NotFound)` - Workspace or owner missing
    /// - `Err(AppError::AlreadyExists)` - URL already tracked
    /// - `Err(AppError::Validation)` - Empty title or URL
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateDocumentParam) -> Result<Document, AppError> {
        if param.title.trim().is_empty() || param.url.trim().is_empty() {
            return Err(AppError::Validation(
                "title and url are required".to_string(),
            ));
        }

        let workspace_repo = WorkspaceRepository::new(self.db);
        if workspace_repo.get_by_id(param.workspace_id).await?.is_none() {
            return Err(AppError::NotFound("Workspace not found".to_string()));
        }

        if let Some(owner_id) = param.owner_id {
            let user_repo = UserRepository::new(self.db);
            if user_repo.get_by_id(owner_id).await?.is_none() {
                return Err(AppError::NotFound("Owner not found".to_string()));
            }
        }

        let doc_repo = DocumentRepository::new(self.db);
        if doc_repo.get_by_url(&param.url).await?.is_some() {
            return Err(AppError::AlreadyExists(format!(
                "document with URL '{}' already exists",
                param.url
            )));
        }

        let document = doc_repo.create(param).await?;

        Ok(document)
    }

    /// Loads a document together with its flags, the canonical read for the
    /// document detail view.
    ///
    /// # Returns
    /// - `Ok((Document, Vec<Flag>))` - Document and its flags, newest first
    /// - `Err(AppError::NotFound)` - Document missing
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_with_flags(&self, id: Uuid) -> Result<(Document, Vec<Flag>), AppError> {
        let document = DocumentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Document not found".to_string()))?;

        let flags = FlagRepository::new(self.db).get_by_document_id(id).await?;

        Ok((document, flags))
    }

    /// Lists the documents of a workspace.
    ///
    /// # Returns
    /// - `Ok(Vec<Document>)` - Documents, ordered by title
    /// - `Err(AppError::NotFound)` - Workspace missing
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list_for_workspace(&self, workspace_id: Uuid) -> Result<Vec<Document>, AppError> {
        let workspace_repo = WorkspaceRepository::new(self.db);
        if workspace_repo.get_by_id(workspace_id).await?.is_none() {
            return Err(AppError::NotFound("Workspace not found".to_string()));
        }

        let documents = DocumentRepository::new(self.db)
            .get_by_workspace_id(workspace_id)
            .await?;

        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_utils::{builder::TestBuilder, context::TestContext, factory};

    async fn context() -> TestContext {
        TestBuilder::new().with_all_tables().build().await.unwrap()
    }

    fn create_param(workspace_id: Uuid, url: &str) -> CreateDocumentParam {
        CreateDocumentParam {
            workspace_id,
            title: "Runbook".to_string(),
            url: url.to_string(),
            external_id: None,
            owner_id: None,
        }
    }

    /// A second document with an already-tracked URL is rejected.
    #[tokio::test]
    async fn create_rejects_duplicate_url() {
        let test = context().await;
        let db = test.db.as_ref().unwrap();

        let org = factory::create_organization(db).await.unwrap();
        let workspace = factory::create_workspace(db, org.id).await.unwrap();

        let service = DocumentService::new(db);
        service
            .create(create_param(workspace.id, "https://wiki.example.com/runbook"))
            .await
            .unwrap();

        let result = service
            .create(create_param(workspace.id, "https://wiki.example.com/runbook"))
            .await;

        assert!(matches!(result, Err(AppError::AlreadyExists(_))));
    }

    /// Creating a document in a missing workspace is a NotFound.
    #[tokio::test]
    async fn create_requires_existing_workspace() {
        let test = context().await;
        let db = test.db.as_ref().unwrap();

        let service = DocumentService::new(db);
        let result = service
            .create(create_param(Uuid::new_v4(), "https://wiki.example.com/x"))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    /// The document detail read returns the document and its flags together.
    #[tokio::test]
    async fn get_with_flags_returns_both() {
        let test = context().await;
        let db = test.db.as_ref().unwrap();

        let (_, _, _, document, flag) =
            factory::helpers::create_flag_with_dependencies(db).await.unwrap();

        let service = DocumentService::new(db);
        let (doc, flags) = service.get_with_flags(document.id).await.unwrap();

        assert_eq!(doc.id, document.id);
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].id, flag.id);
    }
}
