use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

use crate::server::{
    data::organization::OrganizationRepository, model::organization::CreateOrganizationParam,
};

mod create;
mod get_by_id;
mod get_by_slug;

fn create_param(name: &str, slug: &str) -> CreateOrganizationParam {
    CreateOrganizationParam {
        name: name.to_string(),
        slug: slug.to_string(),
        confluence_base_url: None,
        confluence_email: None,
        confluence_token: None,
        confluence_space_key: None,
    }
}
