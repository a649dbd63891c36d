//! Workspace data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::workspace::{CreateWorkspaceParam, Workspace};

pub struct WorkspaceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkspaceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateWorkspaceParam) -> Result<Workspace, DbErr> {
        let entity = entity::workspace::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            org_id: ActiveValue::Set(param.org_id),
            name: ActiveValue::Set(param.name),
            integration_type: ActiveValue::Set(param.integration_type),
            integration_config: ActiveValue::Set(param.integration_config),
            is_default: ActiveValue::Set(param.is_default),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Workspace::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Workspace>, DbErr> {
        let entity = entity::prelude::Workspace::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Workspace::from_entity))
    }

    /// Gets all workspaces of an organization, ordered by name.
    pub async fn get_by_org_id(&self, org_id: Uuid) -> Result<Vec<Workspace>, DbErr> {
        let entities = entity::prelude::Workspace::find()
            .filter(entity::workspace::Column::OrgId.eq(org_id))
            .order_by_asc(entity::workspace::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Workspace::from_entity).collect())
    }

    /// Replaces the opaque integration config of a workspace.
    ///
    /// # Returns
    /// - `Ok(())` - Config updated (or no matching workspace found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_integration(
        &self,
        id: Uuid,
        config: serde_json::Value,
    ) -> Result<(), DbErr> {
        entity::prelude::Workspace::update_many()
            .filter(entity::workspace::Column::Id.eq(id))
            .col_expr(
                entity::workspace::Column::IntegrationConfig,
                sea_orm::sea_query::Expr::value(config),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
