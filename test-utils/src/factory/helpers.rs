//! Shared helpers for test factories.

use std::sync::atomic::{AtomicUsize, Ordering};

use sea_orm::{DatabaseConnection, DbErr};

/// Returns a process-wide unique counter value, used to keep factory
/// defaults (emails, slugs, URLs) distinct across invocations.
pub fn next_id() -> usize {
    static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Creates a flag together with its full dependency chain.
///
/// # Returns
/// - `Ok((organization, user, workspace, document, flag))` - All created rows
/// - `Err(DbErr)` - Database error during any insert
pub async fn create_flag_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::organization::Model,
        entity::user::Model,
        entity::workspace::Model,
        entity::document::Model,
        entity::flag::Model,
    ),
    DbErr,
> {
    let org = super::organization::create_organization(db).await?;
    let user = super::user::create_user(db, org.id).await?;
    let workspace = super::workspace::create_workspace(db, org.id).await?;
    let document = super::document::create_document(db, workspace.id).await?;
    let flag = super::flag::FlagFactory::new(db)
        .document_id(document.id)
        .created_by(user.id)
        .build()
        .await?;

    Ok((org, user, workspace, document, flag))
}
