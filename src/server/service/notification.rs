//! Notification service for business logic.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{notification::NotificationRepository, user::UserRepository},
    error::AppError,
    model::notification::Notification,
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's newest notifications. A non-positive limit behaves as
    /// the default of 20.
    ///
    /// # Returns
    /// - `Ok(Vec<Notification>)` - Notifications, newest first
    /// - `Err(AppError::NotFound)` - User missing
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Notification>, AppError> {
        let user_repo = UserRepository::new(self.db);
        if user_repo.get_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let limit = if limit <= 0 { 20 } else { limit as u64 };
        let notifications = NotificationRepository::new(self.db)
            .get_by_user_id(user_id, limit)
            .await?;

        Ok(notifications)
    }

    /// Marks one notification as read.
    ///
    /// # Returns
    /// - `Ok(())` - Notification marked read
    /// - `Err(AppError::NotFound)` - No notification with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn mark_read(&self, id: Uuid) -> Result<(), AppError> {
        let updated = NotificationRepository::new(self.db).mark_as_read(id).await?;
        if !updated {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }
        Ok(())
    }

    /// Marks every unread notification of a user as read.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of notifications marked read
    /// - `Err(AppError::NotFound)` - User missing
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn mark_all_read(&self, user_id: Uuid) -> Result<u64, AppError> {
        let user_repo = UserRepository::new(self.db);
        if user_repo.get_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let count = NotificationRepository::new(self.db)
            .mark_all_as_read(user_id)
            .await?;

        Ok(count)
    }
}
