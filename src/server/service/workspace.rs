//! Workspace service for business logic.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{organization::OrganizationRepository, workspace::WorkspaceRepository},
    error::AppError,
    model::workspace::{CreateWorkspaceParam, Workspace},
};

pub struct WorkspaceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkspaceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a workspace under an existing organization.
    ///
    /// # Returns
    /// - `Ok(Workspace)` - The created workspace
    /// - `Err(AppError::NotFound)` - Organization missing
    /// - `Err(AppError::Validation)` - Empty name
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateWorkspaceParam) -> Result<Workspace, AppError> {
        if param.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".to_string()));
        }

        let org_repo = OrganizationRepository::new(self.db);
        if org_repo.get_by_id(param.org_id).await?.is_none() {
            return Err(AppError::NotFound("Organization not found".to_string()));
        }

        let workspace = WorkspaceRepository::new(self.db).create(param).await?;

        Ok(workspace)
    }

    /// Lists the workspaces of an organization.
    ///
    /// # Returns
    /// - `Ok(Vec<Workspace>)` - Workspaces, ordered by name
    /// - `Err(AppError::NotFound)` - Organization missing
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list_for_org(&self, org_id: Uuid) -> Result<Vec<Workspace>, AppError> {
        let org_repo = OrganizationRepository::new(self.db);
        if org_repo.get_by_id(org_id).await?.is_none() {
            return Err(AppError::NotFound("Organization not found".to_string()));
        }

        let workspaces = WorkspaceRepository::new(self.db).get_by_org_id(org_id).await?;

        Ok(workspaces)
    }

    /// Replaces a workspace's opaque integration config.
    ///
    /// # Returns
    /// - `Ok(Workspace)` - The workspace with the new config
    /// - `Err(AppError::NotFound)` - Workspace missing
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update_integration(
        &self,
        id: Uuid,
        config: serde_json::Value,
    ) -> Result<Workspace, AppError> {
        let repo = WorkspaceRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Workspace not found".to_string()));
        }

        repo.update_integration(id, config).await?;

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Workspace not found".to_string()))
    }
}
