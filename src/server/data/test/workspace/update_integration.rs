use super::*;

/// Tests replacing the opaque integration config.
///
/// Expected: Ok with the new config visible on re-fetch
#[tokio::test]
async fn replaces_integration_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Organization)
        .with_table(entity::prelude::Workspace)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let org = factory::create_organization(db).await?;
    let workspace = factory::workspace::WorkspaceFactory::new(db, org.id)
        .integration_config(serde_json::json!({"space": "OLD"}))
        .build()
        .await?;

    let repo = WorkspaceRepository::new(db);
    repo.update_integration(workspace.id, serde_json::json!({"space": "ENG", "sync": true}))
        .await?;

    let stored = repo.get_by_id(workspace.id).await?.unwrap();
    let config = stored.integration_config.unwrap();
    assert_eq!(config["space"], "ENG");
    assert_eq!(config["sync"], true);

    Ok(())
}
