use serde::{Deserialize, Serialize};

/// Result of POST /api/v1/orgs/{id}/test-confluence.
#[derive(Serialize, Deserialize)]
pub struct ConfluenceTestDto {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct ConfluencePageDto {
    pub id: String,
    pub title: String,
    pub url: String,
    pub space: String,
}

#[derive(Serialize, Deserialize)]
pub struct ConfluencePageListDto {
    pub pages: Vec<ConfluencePageDto>,
    pub count: usize,
}

/// A page body in the provider's storage representation, as returned by the
/// document page endpoints.
#[derive(Serialize, Deserialize)]
pub struct ConfluencePageContentDto {
    pub id: String,
    pub title: String,
    pub body_html: String,
    pub version: i64,
}

/// Body for PUT /api/v1/documents/{id}/page.
#[derive(Serialize, Deserialize, Clone)]
pub struct UpdatePageRequest {
    pub body_html: String,
}
