//! Organization factory for creating test organization entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::factory::helpers::next_id;

/// Factory for creating test organizations with customizable fields.
///
/// Defaults:
/// - name: `"Org {id}"`, slug: `"org-{id}"` (id auto-incremented)
/// - no Confluence credentials
pub struct OrganizationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    slug: String,
    confluence_base_url: Option<String>,
    confluence_email: Option<String>,
    confluence_token: Option<String>,
    confluence_space_key: Option<String>,
}

impl<'a> OrganizationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Org {}", id),
            slug: format!("org-{}", id),
            confluence_base_url: None,
            confluence_email: None,
            confluence_token: None,
            confluence_space_key: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Sets the full Confluence credential triple in one call.
    pub fn confluence(
        mut self,
        base_url: impl Into<String>,
        email: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        self.confluence_base_url = Some(base_url.into());
        self.confluence_email = Some(email.into());
        self.confluence_token = Some(token.into());
        self
    }

    pub fn space_key(mut self, space_key: impl Into<String>) -> Self {
        self.confluence_space_key = Some(space_key.into());
        self
    }

    /// Builds and inserts the organization entity into the database.
    pub async fn build(self) -> Result<entity::organization::Model, DbErr> {
        entity::organization::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            confluence_base_url: ActiveValue::Set(self.confluence_base_url),
            confluence_email: ActiveValue::Set(self.confluence_email),
            confluence_token: ActiveValue::Set(self.confluence_token),
            confluence_space_key: ActiveValue::Set(self.confluence_space_key),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an organization with default values.
pub async fn create_organization(
    db: &DatabaseConnection,
) -> Result<entity::organization::Model, DbErr> {
    OrganizationFactory::new(db).build().await
}
