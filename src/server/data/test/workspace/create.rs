use super::*;

/// Tests creating a workspace and listing it by organization.
///
/// Expected: Ok with the workspace present in the organization listing
#[tokio::test]
async fn creates_and_lists_by_org() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Organization)
        .with_table(entity::prelude::Workspace)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let org = factory::create_organization(db).await?;

    let repo = WorkspaceRepository::new(db);
    let workspace = repo
        .create(CreateWorkspaceParam {
            org_id: org.id,
            name: "Engineering Docs".to_string(),
            integration_type: "confluence".to_string(),
            integration_config: None,
            is_default: true,
        })
        .await?;

    assert_eq!(workspace.name, "Engineering Docs");
    assert!(workspace.is_default);

    let listed = repo.get_by_org_id(org.id).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, workspace.id);

    Ok(())
}

/// Tests that workspaces of other organizations are not listed.
///
/// Expected: Ok with only the organization's own workspace
#[tokio::test]
async fn listing_is_scoped_to_org() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Organization)
        .with_table(entity::prelude::Workspace)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let org = factory::create_organization(db).await?;
    let other_org = factory::create_organization(db).await?;

    let own = factory::create_workspace(db, org.id).await?;
    factory::create_workspace(db, other_org.id).await?;

    let repo = WorkspaceRepository::new(db);
    let listed = repo.get_by_org_id(org.id).await?;

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, own.id);

    Ok(())
}
