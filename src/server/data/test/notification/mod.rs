use entity::sea_orm_active_enums::NotificationType;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

use crate::server::{
    data::notification::NotificationRepository, model::notification::CreateNotificationParam,
};

mod create;
mod mark_as_read;

async fn notification_context() -> TestContext {
    TestBuilder::new().with_all_tables().build().await.unwrap()
}
