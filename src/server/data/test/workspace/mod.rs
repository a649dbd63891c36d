use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::workspace::WorkspaceRepository, model::workspace::CreateWorkspaceParam};

mod create;
mod update_integration;
