//! Organization domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::organization::OrganizationDto;

/// Organization with its Confluence integration settings.
///
/// The credential fields are `None` until the organization configures its
/// integration; the token is held server-side only and never reaches a DTO.
#[derive(Debug, Clone, PartialEq)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    /// Normalized, URL-safe identifier derived from the name. Unique.
    pub slug: String,
    pub confluence_base_url: Option<String>,
    pub confluence_email: Option<String>,
    pub confluence_token: Option<String>,
    pub confluence_space_key: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Organization {
    pub fn from_entity(entity: entity::organization::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            confluence_base_url: entity.confluence_base_url,
            confluence_email: entity.confluence_email,
            confluence_token: entity.confluence_token,
            confluence_space_key: entity.confluence_space_key,
            created_at: entity.created_at,
        }
    }

    /// Converts to the API representation. The token is dropped here.
    pub fn into_dto(self) -> OrganizationDto {
        OrganizationDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            confluence_base_url: self.confluence_base_url,
            confluence_email: self.confluence_email,
            confluence_space_key: self.confluence_space_key,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating an organization. The slug is generated by the
/// service before the repository is called.
#[derive(Debug, Clone)]
pub struct CreateOrganizationParam {
    pub name: String,
    pub slug: String,
    pub confluence_base_url: Option<String>,
    pub confluence_email: Option<String>,
    pub confluence_token: Option<String>,
    pub confluence_space_key: Option<String>,
}

/// Parameters for registering an organization together with its first admin
/// user.
#[derive(Debug, Clone)]
pub struct CreateOrgWithUserParam {
    pub name: String,
    pub user_name: String,
    pub user_email: String,
    pub confluence_base_url: Option<String>,
    pub confluence_email: Option<String>,
    pub confluence_token: Option<String>,
    pub confluence_space_key: Option<String>,
}
