use entity::sea_orm_active_enums::{FlagPriority, FlagStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

use crate::server::{
    data::flag::FlagRepository,
    model::flag::{CreateFlagParam, FlagFilters},
};

mod create;
mod get_by_document_id;
mod get_by_id;
mod get_by_filters;
mod update;

async fn flag_context() -> TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::Organization)
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Workspace)
        .with_table(entity::prelude::Document)
        .with_table(entity::prelude::Flag)
        .build()
        .await
        .unwrap()
}
