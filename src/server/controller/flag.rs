use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::{FlagPriority, FlagStatus};
use uuid::Uuid;

use crate::{
    model::flag::{CreateFlagRequest, FlagFilterQuery, FlagListDto, UpdateFlagRequest},
    server::{
        error::AppError,
        model::flag::{CreateFlagParam, Flag, FlagFilters, UpdateFlagParam},
        service::flag::FlagService,
        state::AppState,
    },
};

/// POST /api/v1/documents/{id}/flags - Raise a flag against a document.
///
/// # Returns
/// - `201 Created`: the created flag
/// - `400 Bad Request`: validation failure
/// - `404 Not Found`: document, creator, or assignee missing
pub async fn create_flag(
    State(state): State<AppState>,
    Path(document_id): Path<Uuid>,
    Json(req): Json<CreateFlagRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = FlagService::new(&state.db);

    let flag = service
        .create(CreateFlagParam {
            document_id,
            created_by: req.created_by,
            assigned_to: req.assigned_to,
            title: req.title,
            description: req.description,
            priority: req.priority.unwrap_or(FlagPriority::Medium),
            status: FlagStatus::Pending,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(flag.into_dto())))
}

/// GET /api/v1/flags - Query flags by optional filters.
///
/// All query parameters are optional and combined with AND: `status`,
/// `priority`, `assigned_to`, `created_by`, `workspace_id`, and a
/// case-insensitive `search` over title and description.
pub async fn list_flags(
    State(state): State<AppState>,
    Query(query): Query<FlagFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = FlagService::new(&state.db);

    let flags = service
        .list(FlagFilters {
            workspace_id: query.workspace_id,
            status: query.status,
            priority: query.priority,
            assigned_to: query.assigned_to,
            created_by: query.created_by,
            search: query.search,
        })
        .await?;

    let flags: Vec<_> = flags.into_iter().map(Flag::into_dto).collect();
    let count = flags.len();

    Ok((StatusCode::OK, Json(FlagListDto { flags, count })))
}

/// GET /api/v1/flags/{id} - Load a flag with creator, assignee, and
/// document resolved.
pub async fn get_flag(
    State(state): State<AppState>,
    Path(flag_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = FlagService::new(&state.db);
    let flag = service.get(flag_id).await?;

    Ok((StatusCode::OK, Json(flag.into_dto())))
}

/// PATCH /api/v1/flags/{id} - Apply a partial update to a flag.
///
/// Absent fields are left unchanged; `resolved_at` follows the status
/// transition.
pub async fn update_flag(
    State(state): State<AppState>,
    Path(flag_id): Path<Uuid>,
    Json(req): Json<UpdateFlagRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = FlagService::new(&state.db);

    let flag = service
        .update(
            flag_id,
            UpdateFlagParam {
                title: req.title,
                description: req.description,
                priority: req.priority,
                status: req.status,
                assigned_to: req.assigned_to,
                resolution: req.resolution,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(flag.into_dto())))
}
