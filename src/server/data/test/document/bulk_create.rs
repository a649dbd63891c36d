use super::*;

/// Tests inserting a batch of documents in one call.
///
/// Expected: Ok with all rows persisted and returned with generated ids
#[tokio::test]
async fn inserts_batch() -> Result<(), DbErr> {
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

    let repo = DocumentRepository::new(db);
    let docs = repo
        .bulk_create(vec![
            create_param(workspace.id, "A", "https://wiki.example.com/a"),
            create_param(workspace.id, "B", "https://wiki.example.com/b"),
            create_param(workspace.id, "C", "https://wiki.example.com/c"),
        ])
        .await?;

    assert_eq!(docs.len(), 3);

    let listed = repo.get_by_workspace_id(workspace.id).await?;
    assert_eq!(listed.len(), 3);

    Ok(())
}

/// Tests that an empty batch is a no-op.
///
/// Expected: Ok with an empty vector and no insert issued
#[tokio::test]
async fn empty_batch_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Organization)
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Workspace)
        .with_table(entity::prelude::Document)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DocumentRepository::new(db);
    let docs = repo.bulk_create(Vec::new()).await?;

    assert!(docs.is_empty());

    Ok(())
}
