use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::document::{CreateDocumentRequest, DocumentWithFlagsDto},
    server::{
        error::AppError,
        model::{
            document::{CreateDocumentParam, Document},
            flag::Flag,
        },
        service::document::DocumentService,
        state::AppState,
    },
};

/// POST /api/v1/workspaces/{id}/documents - Attach a document to a
/// workspace.
///
/// # Returns
/// - `201 Created`: the created document
/// - `400 Bad Request`: validation failure or duplicate URL
/// - `404 Not Found`: workspace or owner missing
pub async fn create_document(
    State(state): State<AppState>,
    Path(workspace_id): Path<Uuid>,
    Json(req): Json<CreateDocumentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = DocumentService::new(&state.db);

    let document = service
        .create(CreateDocumentParam {
            workspace_id,
            title: req.title,
            url: req.url,
            external_id: req.external_id,
            owner_id: req.owner_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(document.into_dto())))
}

/// GET /api/v1/workspaces/{id}/documents - List a workspace's documents.
pub async fn list_documents(
    State(state): State<AppState>,
    Path(workspace_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = DocumentService::new(&state.db);
    let documents = service.list_for_workspace(workspace_id).await?;

    let documents_dto: Vec<_> = documents.into_iter().map(Document::into_dto).collect();

    Ok((StatusCode::OK, Json(documents_dto)))
}

/// GET /api/v1/documents/{id} - Load a document together with its flags.
///
/// # Returns
/// - `200 OK`: `{document, flags}`
/// - `404 Not Found`: document missing
pub async fn get_document(
    State(state): State<AppState>,
    Path(document_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = DocumentService::new(&state.db);
    let (document, flags) = service.get_with_flags(document_id).await?;

    Ok((
        StatusCode::OK,
        Json(DocumentWithFlagsDto {
            document: document.into_dto(),
            flags: flags.into_iter().map(Flag::into_dto).collect(),
        }),
    ))
}
