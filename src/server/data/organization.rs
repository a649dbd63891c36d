//! Organization data repository for database operations.
//!
//! Provides the `OrganizationRepository` for creating and querying
//! organization records, converting between entity models and domain models
//! at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use crate::server::model::organization::{CreateOrganizationParam, Organization};

pub struct OrganizationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrganizationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new organization with a generated id and creation timestamp.
    ///
    /// Slug uniqueness is the caller's responsibility; the unique column
    /// constraint is the only safety net at this layer.
    ///
    /// # Arguments
    /// - `param` - Organization fields; the slug is already normalized
    ///
    /// # Returns
    /// - `Ok(Organization)` - The persisted organization with generated values
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateOrganizationParam) -> Result<Organization, DbErr> {
        let entity = entity::organization::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(param.name),
            slug: ActiveValue::Set(param.slug),
            confluence_base_url: ActiveValue::Set(param.confluence_base_url),
            confluence_email: ActiveValue::Set(param.confluence_email),
            confluence_token: ActiveValue::Set(param.confluence_token),
            confluence_space_key: ActiveValue::Set(param.confluence_space_key),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Organization::from_entity(entity))
    }

    /// Finds an organization by its slug.
    ///
    /// # Returns
    /// - `Ok(Some(Organization))` - Organization found
    /// - `Ok(None)` - No organization with that slug
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Organization>, DbErr> {
        let entity = entity::prelude::Organization::find()
            .filter(entity::organization::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(Organization::from_entity))
    }

    /// Finds an organization by its id.
    ///
    /// # Returns
    /// - `Ok(Some(Organization))` - Organization found
    /// - `Ok(None)` - No organization with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Organization>, DbErr> {
        let entity = entity::prelude::Organization::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Organization::from_entity))
    }
}
