use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::LimitQuery,
        confluence::{ConfluencePageContentDto, ConfluencePageListDto, UpdatePageRequest},
    },
    server::{
        error::AppError,
        model::confluence::ConfluencePage,
        provider::confluence::Page,
        service::confluence::ConfluenceService,
        state::AppState,
    },
};

/// POST /api/v1/orgs/{id}/test-confluence - Probe Confluence credentials.
///
/// Failed authentication and missing configuration are reported in the body
/// with `success: false` rather than as error statuses.
///
/// # Returns
/// - `200 OK`: `{success, message, details}`
/// - `404 Not Found`: organization missing
/// - `502 Bad Gateway`: endpoint unreachable
pub async fn test_connection(
    State(state): State<AppState>,
    Path(org_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = ConfluenceService::new(&state.db, &state.http_client, &state.confluence_defaults);
    let result = service.test_connection(org_id).await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// GET /api/v1/orgs/{id}/confluence/pages?limit=N - List pages from the
/// organization's configured space.
///
/// # Returns
/// - `200 OK`: `{pages, count}`
/// - `400 Bad Request`: integration not configured
/// - `404 Not Found`: organization missing
/// - `502 Bad Gateway`: provider failure
pub async fn list_pages(
    State(state): State<AppState>,
    Path(org_id): Path<Uuid>,
    Query(query): Query<LimitQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ConfluenceService::new(&state.db, &state.http_client, &state.confluence_defaults);
    let pages = service
        .list_pages(org_id, query.limit.unwrap_or(0))
        .await?;

    let pages: Vec<_> = pages.into_iter().map(ConfluencePage::into_dto).collect();
    let count = pages.len();

    Ok((StatusCode::OK, Json(ConfluencePageListDto { pages, count })))
}

/// GET /api/v1/documents/{id}/page - Fetch the provider page a document is
/// linked to, with its storage-format body.
pub async fn get_document_page(
    State(state): State<AppState>,
    Path(document_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = ConfluenceService::new(&state.db, &state.http_client, &state.confluence_defaults);
    let page = service.get_document_page(document_id).await?;

    Ok((StatusCode::OK, Json(page_dto(page))))
}

/// PUT /api/v1/documents/{id}/page - Replace the body of the provider page a
/// document is linked to. The title is preserved and the version bumped by
/// one.
pub async fn update_document_page(
    State(state): State<AppState>,
    Path(document_id): Path<Uuid>,
    Json(req): Json<UpdatePageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = ConfluenceService::new(&state.db, &state.http_client, &state.confluence_defaults);
    let page = service
        .update_document_page(document_id, &req.body_html)
        .await?;

    Ok((StatusCode::OK, Json(page_dto(page))))
}

fn page_dto(page: Page) -> ConfluencePageContentDto {
    ConfluencePageContentDto {
        id: page.id,
        title: page.title,
        body_html: page.body.storage.value,
        version: page.version.number,
    }
}
