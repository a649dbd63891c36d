use super::*;

/// Tests stamping the last_checked column.
///
/// Expected: Ok with last_checked set after the call
#[tokio::test]
async fn stamps_last_checked() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Organization)
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Workspace)
        .with_table(entity::prelude::Document)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let org = factory::create_organization(db).await?;
    let workspace = factory::create_workspace(db, org.id).await?;
    let doc = factory::create_document(db, workspace.id).await?;
    assert!(doc.last_checked.is_none());

    let repo = DocumentRepository::new(db);
    repo.update_last_checked(doc.id).await?;

    let stored = repo.get_by_id(doc.id).await?.unwrap();
    assert!(stored.last_checked.is_some());

    Ok(())
}
