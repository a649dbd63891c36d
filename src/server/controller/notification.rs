use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{api::LimitQuery, notification::NotificationListDto},
    server::{
        error::AppError, model::notification::Notification,
        service::notification::NotificationService, state::AppState,
    },
};

/// GET /api/v1/users/{id}/notifications?limit=N - List a user's newest
/// notifications.
pub async fn list_notifications(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<LimitQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = NotificationService::new(&state.db);
    let notifications = service
        .list_for_user(user_id, query.limit.unwrap_or(0))
        .await?;

    let notifications: Vec<_> = notifications
        .into_iter()
        .map(Notification::into_dto)
        .collect();
    let count = notifications.len();

    Ok((
        StatusCode::OK,
        Json(NotificationListDto {
            notifications,
            count,
        }),
    ))
}

/// POST /api/v1/notifications/{id}/read - Mark one notification as read.
pub async fn mark_read(
    State(state): State<AppState>,
    Path(notification_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = NotificationService::new(&state.db);
    service.mark_read(notification_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/users/{id}/notifications/read-all - Mark every unread
/// notification of a user as read.
pub async fn mark_all_read(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = NotificationService::new(&state.db);
    let count = service.mark_all_read(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "marked_read": count })),
    ))
}
