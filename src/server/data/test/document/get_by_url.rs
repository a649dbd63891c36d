use super::*;

/// Tests finding a document by its URL.
///
/// Expected: Ok(Some(Document)) for a tracked URL, Ok(None) otherwise
#[tokio::test]
async fn finds_by_url() -> Result<(), DbErr> {
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
    let created = factory::document::DocumentFactory::new(db, workspace.id)
        .url("https://wiki.example.com/runbook")
        .build()
        .await?;

    let repo = DocumentRepository::new(db);

    let found = repo.get_by_url("https://wiki.example.com/runbook").await?;
    assert_eq!(found.map(|d| d.id), Some(created.id));

    let missing = repo.get_by_url("https://wiki.example.com/other").await?;
    assert!(missing.is_none());

    Ok(())
}
