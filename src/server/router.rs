use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::server::{
    controller::{confluence, document, flag, notification, organization, workspace},
    state::AppState,
};

/// Builds the route table. The `{id}` segment under /api/v1/orgs carries the
/// organization slug for the bare GET and the organization id everywhere
/// else.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/orgs", post(organization::create_organization))
        .route("/api/v1/orgs/{id}", get(organization::get_organization))
        .route(
            "/api/v1/orgs/{id}/users",
            post(organization::add_user).get(organization::list_users),
        )
        .route(
            "/api/v1/orgs/{id}/test-confluence",
            post(confluence::test_connection),
        )
        .route(
            "/api/v1/orgs/{id}/confluence/pages",
            get(confluence::list_pages),
        )
        .route(
            "/api/v1/orgs/{id}/workspaces",
            post(workspace::create_workspace).get(workspace::list_workspaces),
        )
        .route(
            "/api/v1/workspaces/{id}/integration",
            patch(workspace::update_integration),
        )
        .route(
            "/api/v1/workspaces/{id}/documents",
            post(document::create_document).get(document::list_documents),
        )
        .route("/api/v1/documents/{id}", get(document::get_document))
        .route(
            "/api/v1/documents/{id}/page",
            get(confluence::get_document_page).put(confluence::update_document_page),
        )
        .route("/api/v1/documents/{id}/flags", post(flag::create_flag))
        .route("/api/v1/flags", get(flag::list_flags))
        .route(
            "/api/v1/flags/{id}",
            get(flag::get_flag).patch(flag::update_flag),
        )
        .route(
            "/api/v1/users/{id}/notifications",
            get(notification::list_notifications),
        )
        .route(
            "/api/v1/users/{id}/notifications/read-all",
            post(notification::mark_all_read),
        )
        .route(
            "/api/v1/notifications/{id}/read",
            post(notification::mark_read),
        )
        .layer(CorsLayer::permissive())
}

async fn health() -> &'static str {
    "ok"
}
