//! Flag data repository for database operations.
//!
//! Flags reference their creator, optional assignee, and document. Lookups
//! that serve API reads resolve those references eagerly with follow-up
//! queries; `get_by_filters` composes an AND of optional predicates on top.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    ExprTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use uuid::Uuid;

use crate::server::model::{
    document::Document,
    flag::{CreateFlagParam, Flag, FlagFilters},
    user::User,
};

pub struct FlagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new flag with a generated id and timestamps.
    ///
    /// # Returns
    /// - `Ok(Flag)` - The persisted flag (related entities not loaded)
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateFlagParam) -> Result<Flag, DbErr> {
        let now = Utc::now();
        let entity = entity::flag::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            document_id: ActiveValue::Set(param.document_id),
            created_by: ActiveValue::Set(param.created_by),
            assigned_to: ActiveValue::Set(param.assigned_to),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            priority: ActiveValue::Set(param.priority),
            status: ActiveValue::Set(param.status),
            resolution: ActiveValue::Set(None),
            resolved_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Flag::from_entity(entity))
    }

    /// Finds a flag by id with creator, assignee, and document resolved.
    ///
    /// # Returns
    /// - `Ok(Some(Flag))` - Flag found, related entities populated
    /// - `Ok(None)` - No flag with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Flag>, DbErr> {
        let entity = entity::prelude::Flag::find_by_id(id).one(self.db).await?;

        let Some(entity) = entity else {
            return Ok(None);
        };

        let mut flag = Flag::from_entity(entity);
        self.load_users(std::slice::from_mut(&mut flag)).await?;

        flag.document = entity::prelude::Document::find_by_id(flag.document_id)
            .one(self.db)
            .await?
            .map(Document::from_entity);

        Ok(Some(flag))
    }

    /// Gets all flags of a document with creator and assignee resolved,
    /// newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Flag>)` - Flags for the document (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_document_id(&self, document_id: Uuid) -> Result<Vec<Flag>, DbErr> {
        let entities = entity::prelude::Flag::find()
            .filter(entity::flag::Column::DocumentId.eq(document_id))
            .order_by_desc(entity::flag::Column::CreatedAt)
            .all(self.db)
            .await?;

        let mut flags: Vec<Flag> = entities.into_iter().map(Flag::from_entity).collect();
        self.load_users(&mut flags).await?;

        Ok(flags)
    }

    /// Queries flags by an AND of optional predicates.
    ///
    /// `None` fields add no condition. The workspace filter joins against the
    /// document table; the search term matches a case-insensitive substring
    /// of title OR description. Creator and assignee are resolved on the
    /// result set.
    ///
    /// # Returns
    /// - `Ok(Vec<Flag>)` - Matching flags, newest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_filters(&self, filters: FlagFilters) -> Result<Vec<Flag>, DbErr> {
        let mut query = entity::prelude::Flag::find();

        if let Some(workspace_id) = filters.workspace_id {
            query = query
                .join(JoinType::InnerJoin, entity::flag::Relation::Document.def())
                .filter(entity::document::Column::WorkspaceId.eq(workspace_id));
        }
        if let Some(status) = filters.status {
            query = query.filter(entity::flag::Column::Status.eq(status));
        }
        if let Some(priority) = filters.priority {
            query = query.filter(entity::flag::Column::Priority.eq(priority));
        }
        if let Some(assigned_to) = filters.assigned_to {
            query = query.filter(entity::flag::Column::AssignedTo.eq(assigned_to));
        }
        if let Some(created_by) = filters.created_by {
            query = query.filter(entity::flag::Column::CreatedBy.eq(created_by));
        }
        if let Some(search) = filters.search.as_deref().filter(|s| !s.is_empty()) {
            // lower(..) LIKE keeps the match case-insensitive on both
            // Postgres and the SQLite test backend.
            let pattern = format!("%{}%", search.to_lowercase());
            query = query.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            entity::flag::Entity,
                            entity::flag::Column::Title,
                        ))))
                        .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            entity::flag::Entity,
                            entity::flag::Column::Description,
                        ))))
                        .like(pattern),
                    ),
            );
        }

        let entities = query
            .order_by_desc(entity::flag::Column::CreatedAt)
            .all(self.db)
            .await?;

        let mut flags: Vec<Flag> = entities.into_iter().map(Flag::from_entity).collect();
        self.load_users(&mut flags).await?;

        Ok(flags)
    }

    /// Overwrites a flag row by id.
    ///
    /// Every mutable column is written from the given record; there is no
    /// version check, so the last writer wins.
    ///
    /// # Returns
    /// - `Ok(Flag)` - The updated flag (related entities not loaded)
    /// - `Err(DbErr)` - Row missing or database error during update
    pub async fn update(&self, flag: &Flag) -> Result<Flag, DbErr> {
        let entity = entity::flag::ActiveModel {
            id: ActiveValue::Unchanged(flag.id),
            document_id: ActiveValue::Unchanged(flag.document_id),
            created_by: ActiveValue::Unchanged(flag.created_by),
            assigned_to: ActiveValue::Set(flag.assigned_to),
            title: ActiveValue::Set(flag.title.clone()),
            description: ActiveValue::Set(flag.description.clone()),
            priority: ActiveValue::Set(flag.priority),
            status: ActiveValue::Set(flag.status),
            resolution: ActiveValue::Set(flag.resolution.clone()),
            resolved_at: ActiveValue::Set(flag.resolved_at),
            created_at: ActiveValue::Unchanged(flag.created_at),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .update(self.db)
        .await?;

        Ok(Flag::from_entity(entity))
    }

    /// Resolves creator and assignee references for the given flags with a
    /// single batched user query.
    async fn load_users(&self, flags: &mut [Flag]) -> Result<(), DbErr> {
        let mut user_ids: Vec<Uuid> = Vec::new();
        for flag in flags.iter() {
            user_ids.push(flag.created_by);
            if let Some(assignee_id) = flag.assigned_to {
                user_ids.push(assignee_id);
            }
        }
        user_ids.sort_unstable();
        user_ids.dedup();

        if user_ids.is_empty() {
            return Ok(());
        }

        let users: HashMap<Uuid, User> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, User::from_entity(u)))
            .collect();

        for flag in flags.iter_mut() {
            flag.creator = users.get(&flag.created_by).cloned();
            flag.assignee = flag
                .assigned_to
                .and_then(|id| users.get(&id).cloned());
        }

        Ok(())
    }
}
