use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::document::DocumentRepository, model::document::CreateDocumentParam};

mod bulk_create;
mod create;
mod get_by_url;
mod update_last_checked;

fn create_param(workspace_id: uuid::Uuid, title: &str, url: &str) -> CreateDocumentParam {
    CreateDocumentParam {
        workspace_id,
        title: title.to_string(),
        url: url.to_string(),
        external_id: None,
        owner_id: None,
    }
}
