//! Flag service for business logic.
//!
//! Owns flag validation, the `resolved_at` lifecycle, and the notifications
//! recorded on assignment and resolution.

use chrono::Utc;
use entity::sea_orm_active_enums::{FlagStatus, NotificationType};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        document::DocumentRepository, flag::FlagRepository,
        notification::NotificationRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        flag::{CreateFlagParam, Flag, FlagFilters, UpdateFlagParam},
        notification::CreateNotificationParam,
    },
};

pub struct FlagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Raises a flag against a document.
    ///
    /// The creator is the explicit caller identity; document, creator, and
    /// assignee (when given) must exist. An assignee gets a `flag_assigned`
    /// notification.
    ///
    /// # Returns
    /// - `Ok(Flag)` - The created flag
    /// - `Err(AppError::Validation)` - Title or description out of bounds
    /// - `Err(AppError::NotFound)` - Document, creator, or assignee missing
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateFlagParam) -> Result<Flag, AppError> {
        validate_title(&param.title)?;
        validate_description(&param.description)?;

        let doc_repo = DocumentRepository::new(self.db);
        if doc_repo.get_by_id(param.document_id).await?.is_none() {
            return Err(AppError::NotFound("Document not found".to_string()));
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.get_by_id(param.created_by).await?.is_none() {
            return Err(AppError::NotFound("Creator not found".to_string()));
        }
        if let Some(assignee_id) = param.assigned_to {
            if user_repo.get_by_id(assignee_id).await?.is_none() {
                return Err(AppError::NotFound("Assignee not found".to_string()));
            }
        }

        let flag = FlagRepository::new(self.db).create(param).await?;

        if let Some(assignee_id) = flag.assigned_to {
            self.notify(assignee_id, &flag, NotificationType::FlagAssigned)
                .await?;
        }

        Ok(flag)
    }

    /// Loads a flag with creator, assignee, and document resolved.
    ///
    /// # Returns
    /// - `Ok(Flag)` - Flag found
    /// - `Err(AppError::NotFound)` - No flag with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get(&self, id: Uuid) -> Result<Flag, AppError> {
        FlagRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Flag not found".to_string()))
    }

    /// Queries flags by the optional filter predicates.
    pub async fn list(&self, filters: FlagFilters) -> Result<Vec<Flag>, AppError> {
        let flags = FlagRepository::new(self.db).get_by_filters(filters).await?;
        Ok(flags)
    }

    /// Applies a partial update to a flag over a fresh load.
    ///
    /// Transitioning into `resolved` stamps `resolved_at` and notifies the
    /// flag's creator; transitioning out clears it. A changed assignee gets a
    /// `flag_assigned` notification. The write itself is a blind overwrite:
    /// two concurrent updates both succeed and the last one wins.
    ///
    /// # Returns
    /// - `Ok(Flag)` - The updated flag
    /// - `Err(AppError::Validation)` - Field bounds violated
    /// - `Err(AppError::NotFound)` - Flag or new assignee missing
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, id: Uuid, param: UpdateFlagParam) -> Result<Flag, AppError> {
        let flag_repo = FlagRepository::new(self.db);
        let mut flag = flag_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Flag not found".to_string()))?;

        if let Some(title) = param.title {
            validate_title(&title)?;
            flag.title = title;
        }
        if let Some(description) = param.description {
            validate_description(&description)?;
            flag.description = description;
        }
        if let Some(priority) = param.priority {
            flag.priority = priority;
        }
        if let Some(resolution) = param.resolution {
            flag.resolution = Some(resolution);
        }

        let mut assignee_changed = false;
        if let Some(assignee_id) = param.assigned_to {
            let user_repo = UserRepository::new(self.db);
            if user_repo.get_by_id(assignee_id).await?.is_none() {
                return Err(AppError::NotFound("Assignee not found".to_string()));
            }
            assignee_changed = flag.assigned_to != Some(assignee_id);
            flag.assigned_to = Some(assignee_id);
        }

        let mut entered_resolved = false;
        if let Some(status) = param.status {
            entered_resolved = status == FlagStatus::Resolved && flag.status != FlagStatus::Resolved;
            let left_resolved = status != FlagStatus::Resolved && flag.status == FlagStatus::Resolved;

            flag.status = status;
            if entered_resolved {
                flag.resolved_at = Some(Utc::now());
            } else if left_resolved {
                flag.resolved_at = None;
            }
        }

        let updated = flag_repo.update(&flag).await?;

        if assignee_changed {
            if let Some(assignee_id) = updated.assigned_to {
                self.notify(assignee_id, &updated, NotificationType::FlagAssigned)
                    .await?;
            }
        }
        if entered_resolved {
            self.notify(updated.created_by, &updated, NotificationType::FlagResolved)
                .await?;
        }

        Ok(updated)
    }

    async fn notify(
        &self,
        user_id: Uuid,
        flag: &Flag,
        kind: NotificationType,
    ) -> Result<(), AppError> {
        let message = match kind {
            NotificationType::FlagAssigned => {
                format!("You were assigned flag '{}'", flag.title)
            }
            NotificationType::FlagResolved => {
                format!("Flag '{}' was resolved", flag.title)
            }
            NotificationType::FlagCreated => {
                format!("Flag '{}' was created", flag.title)
            }
        };

        NotificationRepository::new(self.db)
            .create(CreateNotificationParam {
                user_id,
                flag_id: flag.id,
                kind,
                message,
            })
            .await?;

        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), AppError> {
    let len = title.chars().count();
    if !(3..=200).contains(&len) {
        return Err(AppError::Validation(
            "title must be between 3 and 200 characters".to_string(),
        ));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), AppError> {
    let len = description.chars().count();
    if !(10..=1000).contains(&len) {
        return Err(AppError::Validation(
            "description must be between 10 and 1000 characters".to_string(),
        ));
    }
    Ok(())
}
