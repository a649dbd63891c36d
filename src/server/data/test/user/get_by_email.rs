use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some(User)) with matching data
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Organization)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let org = factory::create_organization(db).await?;
    let created = factory::user::UserFactory::new(db, org.id)
        .email("dev@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.get_by_email("dev@example.com").await?;

    assert!(user.is_some());
    assert_eq!(user.unwrap().id, created.id);

    Ok(())
}

/// Tests querying for an email that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Organization)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.get_by_email("missing@example.com").await?;

    assert!(user.is_none());

    Ok(())
}
