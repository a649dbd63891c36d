//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

use crate::server::config::ConfluenceDefaults;

/// Shared state initialized once at startup and cloned per request via Axum's
/// state extraction. All fields are cheap to clone: `DatabaseConnection` is a
/// pooled handle and `reqwest::Client` is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for outbound Confluence requests.
    pub http_client: reqwest::Client,

    /// Environment-level Confluence credentials, used when an organization
    /// has none of its own.
    pub confluence_defaults: ConfluenceDefaults,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        confluence_defaults: ConfluenceDefaults,
    ) -> Self {
        Self {
            db,
            http_client,
            confluence_defaults,
        }
    }
}
