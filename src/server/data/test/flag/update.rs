use super::*;

/// Tests that updating only the status leaves every other field unchanged.
///
/// Expected: Ok with the new status and identical remaining fields on
/// re-fetch
#[tokio::test]
async fn status_change_preserves_other_fields() -> Result<(), DbErr> {
    let test = flag_context().await;
    let db = test.db.as_ref().unwrap();

    let created = factory::create_flag(db).await?;

    let repo = FlagRepository::new(db);
    let mut flag = repo.get_by_id(created.id).await?.unwrap();
    flag.status = FlagStatus::InProgress;
    repo.update(&flag).await?;

    let fetched = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(fetched.status, FlagStatus::InProgress);
    assert_eq!(fetched.title, created.title);
    assert_eq!(fetched.description, created.description);
    assert_eq!(fetched.priority, created.priority);
    assert_eq!(fetched.assigned_to, created.assigned_to);

    Ok(())
}

/// Tests that the overwrite is blind: a second update based on stale state
/// succeeds and wins.
///
/// Expected: Ok with the second writer's values persisted
#[tokio::test]
async fn last_writer_wins_without_version_check() -> Result<(), DbErr> {
    let test = flag_context().await;
    let db = test.db.as_ref().unwrap();

    let created = factory::create_flag(db).await?;

    let repo = FlagRepository::new(db);
    let mut first = repo.get_by_id(created.id).await?.unwrap();
    let mut second = repo.get_by_id(created.id).await?.unwrap();

    first.title = "First writer".to_string();
    repo.update(&first).await?;

    second.title = "Second writer".to_string();
    repo.update(&second).await?;

    let fetched = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(fetched.title, "Second writer");

    Ok(())
}

/// Tests persisting resolution fields through update.
///
/// Expected: Ok with resolution text and resolved_at stored
#[tokio::test]
async fn stores_resolution_fields() -> Result<(), DbErr> {
    let test = flag_context().await;
    let db = test.db.as_ref().unwrap();

    let created = factory::create_flag(db).await?;

    let repo = FlagRepository::new(db);
    let mut flag = repo.get_by_id(created.id).await?.unwrap();
    flag.status = FlagStatus::Resolved;
    flag.resolution = Some("Rewrote the section".to_string());
    flag.resolved_at = Some(chrono::Utc::now());
    repo.update(&flag).await?;

    let fetched = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(fetched.status, FlagStatus::Resolved);
    assert_eq!(fetched.resolution.as_deref(), Some("Rewrote the section"));
    assert!(fetched.resolved_at.is_some());

    Ok(())
}
