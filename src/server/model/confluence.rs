//! Domain types for the Confluence integration surface.

use crate::model::confluence::{ConfluencePageDto, ConfluenceTestDto};

/// Outcome of probing an organization's Confluence credentials. Not an error
/// type: failed authentication and missing configuration are reported as
/// `success = false` with diagnostic detail.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionTest {
    pub success: bool,
    pub message: String,
    pub details: Option<String>,
}

impl ConnectionTest {
    pub fn into_dto(self) -> ConfluenceTestDto {
        ConfluenceTestDto {
            success: self.success,
            message: self.message,
            details: self.details,
        }
    }
}

/// One entry of the provider's content listing, flattened for the API.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfluencePage {
    pub id: String,
    pub title: String,
    /// Absolute link: organization base URL + the relative web-UI link.
    pub url: String,
    pub space: String,
}

impl ConfluencePage {
    pub fn into_dto(self) -> ConfluencePageDto {
        ConfluencePageDto {
            id: self.id,
            title: self.title,
            url: self.url,
            space: self.space,
        }
    }
}
