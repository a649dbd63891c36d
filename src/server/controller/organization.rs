use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        organization::{CreateOrgRequest, CreateOrgResponse},
        user::AddUserRequest,
    },
    server::{
        error::AppError,
        model::{
            organization::CreateOrgWithUserParam,
            user::{AddUserParam, User},
        },
        service::organization::OrganizationService,
        state::AppState,
    },
};

/// POST /api/v1/orgs - Register an organization with its first admin user.
///
/// # Returns
/// - `201 Created`: the organization and its admin user
/// - `400 Bad Request`: validation failure or duplicate slug
pub async fn create_organization(
    State(state): State<AppState>,
    Json(req): Json<CreateOrgRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrganizationService::new(&state.db);

    let (org, user) = service
        .create_with_user(CreateOrgWithUserParam {
            name: req.name,
            user_name: req.user_name,
            user_email: req.user_email,
            confluence_base_url: req.confluence_base_url,
            confluence_email: req.confluence_email,
            confluence_token: req.confluence_token,
            confluence_space_key: req.confluence_space_key,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateOrgResponse {
            organization: org.into_dto(),
            user: user.into_dto(),
        }),
    ))
}

/// GET /api/v1/orgs/{slug} - Look up an organization by slug.
///
/// # Returns
/// - `200 OK`: the organization
/// - `404 Not Found`: no organization with that slug
pub async fn get_organization(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrganizationService::new(&state.db);
    let org = service.get_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(org.into_dto())))
}

/// POST /api/v1/orgs/{id}/users - Add a member to an organization.
///
/// # Returns
/// - `201 Created`: the created user
/// - `400 Bad Request`: validation failure or duplicate email
/// - `404 Not Found`: organization missing
pub async fn add_user(
    State(state): State<AppState>,
    Path(org_id): Path<Uuid>,
    Json(req): Json<AddUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrganizationService::new(&state.db);

    let user = service
        .add_user(AddUserParam {
            org_id,
            email: req.email,
            name: req.name,
            role: req.role,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// GET /api/v1/orgs/{id}/users - List an organization's active users.
///
/// # Returns
/// - `200 OK`: JSON array of users
/// - `404 Not Found`: organization missing
pub async fn list_users(
    State(state): State<AppState>,
    Path(org_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrganizationService::new(&state.db);
    let users = service.list_users(org_id).await?;

    let users_dto: Vec<_> = users.into_iter().map(User::into_dto).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}
