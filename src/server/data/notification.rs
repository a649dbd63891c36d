//! Notification data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::notification::{CreateNotificationParam, Notification};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new unread notification with a generated id.
    pub async fn create(&self, param: CreateNotificationParam) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(param.user_id),
            flag_id: ActiveValue::Set(param.flag_id),
            kind: ActiveValue::Set(param.kind),
            message: ActiveValue::Set(param.message),
            read_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Gets the newest notifications of a user, up to `limit`.
    pub async fn get_by_user_id(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Notification>, DbErr> {
        let entities = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(Notification::from_entity)
            .collect())
    }

    /// Stamps a notification's `read_at` with the current time.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was updated
    /// - `Ok(false)` - No notification with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_as_read(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::Id.eq(id))
            .col_expr(
                entity::notification::Column::ReadAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Stamps `read_at` for every unread notification of a user.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of notifications marked read
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_all_as_read(&self, user_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::ReadAt.is_null())
            .col_expr(
                entity::notification::Column::ReadAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
