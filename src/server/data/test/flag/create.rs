use super::*;

/// Tests creating a flag.
///
/// Verifies that the repository persists the row, populates the generated
/// id, and leaves resolution fields empty.
///
/// Expected: Ok with all fields round-tripped
#[tokio::test]
async fn creates_new_flag() -> Result<(), DbErr> {
    let test = flag_context().await;
    let db = test.db.as_ref().unwrap();

    let org = factory::create_organization(db).await?;
    let user = factory::create_user(db, org.id).await?;
    let workspace = factory::create_workspace(db, org.id).await?;
    let document = factory::create_document(db, workspace.id).await?;

    let repo = FlagRepository::new(db);
    let flag = repo
        .create(CreateFlagParam {
            document_id: document.id,
            created_by: user.id,
            assigned_to: None,
            title: "Outdated setup steps".to_string(),
            description: "The install section references a retired CLI.".to_string(),
            priority: FlagPriority::High,
            status: FlagStatus::Pending,
        })
        .await?;

    assert_eq!(flag.title, "Outdated setup steps");
    assert_eq!(flag.priority, FlagPriority::High);
    assert_eq!(flag.status, FlagStatus::Pending);
    assert!(flag.resolution.is_none());
    assert!(flag.resolved_at.is_none());

    Ok(())
}

/// Tests the round-trip property: a flag created then fetched by id returns
/// identical title, description, priority, and status.
#[tokio::test]
async fn created_flag_round_trips_by_id() -> Result<(), DbErr> {
    let test = flag_context().await;
    let db = test.db.as_ref().unwrap();

    let org = factory::create_organization(db).await?;
    let user = factory::create_user(db, org.id).await?;
    let workspace = factory::create_workspace(db, org.id).await?;
    let document = factory::create_document(db, workspace.id).await?;

    let repo = FlagRepository::new(db);
    let created = repo
        .create(CreateFlagParam {
            document_id: document.id,
            created_by: user.id,
            assigned_to: None,
            title: "Broken screenshot".to_string(),
            description: "Figure 3 renders as a dead link in the export.".to_string(),
            priority: FlagPriority::Low,
            status: FlagStatus::Pending,
        })
        .await?;

    let fetched = repo.get_by_id(created.id).await?.unwrap();

    assert_eq!(fetched.title, created.title);
    assert_eq!(fetched.description, created.description);
    assert_eq!(fetched.priority, created.priority);
    assert_eq!(fetched.status, created.status);

    Ok(())
}
