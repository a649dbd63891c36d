use super::*;

/// Tests finding an organization by slug.
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

    let created = factory::organization::OrganizationFactory::new(db)
        .name("Acme Corp")
        .slug("acme-corp")
        .build()
        .await?;

    let repo = OrganizationRepository::new(db);
    let org = repo.get_by_slug("acme-corp").await?;

    assert!(org.is_some());
    let org = org.unwrap();
    assert_eq!(org.id, created.id);
    assert_eq!(org.name, "Acme Corp");

    Ok(())
}

/// Tests querying for a slug that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Organization)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrganizationRepository::new(db);
    let org = repo.get_by_slug("missing").await?;

    assert!(org.is_none());

    Ok(())
}
