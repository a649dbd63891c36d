use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::workspace::{CreateWorkspaceRequest, UpdateIntegrationRequest},
    server::{
        error::AppError,
        model::workspace::{CreateWorkspaceParam, Workspace},
        service::workspace::WorkspaceService,
        state::AppState,
    },
};

/// POST /api/v1/orgs/{id}/workspaces - Create a workspace under an
/// organization.
///
/// # Returns
/// - `201 Created`: the created workspace
/// - `400 Bad Request`: validation failure
/// - `404 Not Found`: organization missing
pub async fn create_workspace(
    State(state): State<AppState>,
    Path(org_id): Path<Uuid>,
    Json(req): Json<CreateWorkspaceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = WorkspaceService::new(&state.db);

    let workspace = service
        .create(CreateWorkspaceParam {
            org_id,
            name: req.name,
            integration_type: req
                .integration_type
                .unwrap_or_else(|| "confluence".to_string()),
            integration_config: req.integration_config,
            is_default: req.is_default.unwrap_or(false),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(workspace.into_dto())))
}

/// GET /api/v1/orgs/{id}/workspaces - List an organization's workspaces.
pub async fn list_workspaces(
    State(state): State<AppState>,
    Path(org_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = WorkspaceService::new(&state.db);
    let workspaces = service.list_for_org(org_id).await?;

    let workspaces_dto: Vec<_> = workspaces.into_iter().map(Workspace::into_dto).collect();

    Ok((StatusCode::OK, Json(workspaces_dto)))
}

/// PATCH /api/v1/workspaces/{id}/integration - Replace a workspace's opaque
/// integration config.
pub async fn update_integration(
    State(state): State<AppState>,
    Path(workspace_id): Path<Uuid>,
    Json(req): Json<UpdateIntegrationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = WorkspaceService::new(&state.db);
    let workspace = service
        .update_integration(workspace_id, req.integration_config)
        .await?;

    Ok((StatusCode::OK, Json(workspace.into_dto())))
}
