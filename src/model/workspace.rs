use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone)]
pub struct WorkspaceDto {
    pub id: Uuid,
    pub org_id: Uuid,
    pub name: String,
    pub integration_type: String,
    pub integration_config: Option<serde_json::Value>,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

/// Body for POST /api/v1/orgs/{id}/workspaces.
#[derive(Serialize, Deserialize, Clone)]
pub struct CreateWorkspaceRequest {
    pub name: String,
    #[serde(default)]
    pub integration_type: Option<String>,
    #[serde(default)]
    pub integration_config: Option<serde_json::Value>,
    #[serde(default)]
    pub is_default: Option<bool>,
}

/// Body for PATCH /api/v1/workspaces/{id}/integration.
#[derive(Serialize, Deserialize, Clone)]
pub struct UpdateIntegrationRequest {
    pub integration_config: serde_json::Value,
}
