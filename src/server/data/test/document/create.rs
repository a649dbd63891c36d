use super::*;

/// Tests creating a document and listing it by workspace.
///
/// Expected: Ok with the document present in the workspace listing
#[tokio::test]
async fn creates_and_lists_by_workspace() -> Result<(), DbErr> {
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
    let doc = repo
        .create(create_param(
            workspace.id,
            "Runbook",
            "https://wiki.example.com/runbook",
        ))
        .await?;

    assert_eq!(doc.title, "Runbook");
    assert!(doc.last_checked.is_none());

    let listed = repo.get_by_workspace_id(workspace.id).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, doc.id);

    Ok(())
}
