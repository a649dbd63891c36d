use super::*;

/// Tests that creator, assignee, and document are resolved eagerly.
///
/// Expected: Ok(Some(Flag)) with all three related entities populated
#[tokio::test]
async fn resolves_related_entities() -> Result<(), DbErr> {
    let test = flag_context().await;
    let db = test.db.as_ref().unwrap();

    let org = factory::create_organization(db).await?;
    let creator = factory::create_user(db, org.id).await?;
    let assignee = factory::create_user(db, org.id).await?;
    let workspace = factory::create_workspace(db, org.id).await?;
    let document = factory::create_document(db, workspace.id).await?;

    let created = factory::flag::FlagFactory::new(db)
        .document_id(document.id)
        .created_by(creator.id)
        .assigned_to(assignee.id)
        .build()
        .await?;

    let repo = FlagRepository::new(db);
    let flag = repo.get_by_id(created.id).await?.unwrap();

    assert_eq!(flag.creator.as_ref().map(|u| u.id), Some(creator.id));
    assert_eq!(flag.assignee.as_ref().map(|u| u.id), Some(assignee.id));
    assert_eq!(flag.document.as_ref().map(|d| d.id), Some(document.id));

    Ok(())
}

/// Tests that an unassigned flag resolves without an assignee.
///
/// Expected: Ok(Some(Flag)) with assignee None
#[tokio::test]
async fn unassigned_flag_has_no_assignee() -> Result<(), DbErr> {
    let test = flag_context().await;
    let db = test.db.as_ref().unwrap();

    let created = factory::create_flag(db).await?;

    let repo = FlagRepository::new(db);
    let flag = repo.get_by_id(created.id).await?.unwrap();

    assert!(flag.creator.is_some());
    assert!(flag.assignee.is_none());

    Ok(())
}

/// Tests querying for a flag id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = flag_context().await;
    let db = test.db.as_ref().unwrap();

    let repo = FlagRepository::new(db);
    let flag = repo.get_by_id(uuid::Uuid::new_v4()).await?;

    assert!(flag.is_none());

    Ok(())
}
