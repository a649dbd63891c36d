use entity::sea_orm_active_enums::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

use crate::server::{data::user::UserRepository, model::user::CreateUserParam};

mod create;
mod get_by_email;
mod get_by_org_id;
