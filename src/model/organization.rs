use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::user::UserDto;

/// Organization as exposed over the API. The Confluence API token is
/// deliberately absent; it never leaves the server.
#[derive(Serialize, Deserialize, Clone)]
pub struct OrganizationDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confluence_base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confluence_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confluence_space_key: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body for POST /api/v1/orgs.
#[derive(Serialize, Deserialize, Clone)]
pub struct CreateOrgRequest {
    pub name: String,
    pub user_name: String,
    pub user_email: String,
    #[serde(default)]
    pub confluence_base_url: Option<String>,
    #[serde(default)]
    pub confluence_email: Option<String>,
    #[serde(default)]
    pub confluence_token: Option<String>,
    #[serde(default)]
    pub confluence_space_key: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct CreateOrgResponse {
    pub organization: OrganizationDto,
    pub user: UserDto,
}
