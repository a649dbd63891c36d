use super::*;

/// Tests finding an organization by id.
///
/// Expected: Ok(Some(Organization)) with matching data
#[tokio::test]
async fn finds_existing_organization() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Organization)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_organization(db).await?;

    let repo = OrganizationRepository::new(db);
    let org = repo.get_by_id(created.id).await?;

    assert!(org.is_some());
    assert_eq!(org.unwrap().slug, created.slug);

    Ok(())
}

/// Tests querying for an id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Organization)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrganizationRepository::new(db);
    let org = repo.get_by_id(Uuid::new_v4()).await?;

    assert!(org.is_none());

    Ok(())
}
