use super::*;

/// Tests that only active users of the organization are returned.
///
/// Creates two active users and one deactivated user under the same
/// organization, plus one user under a different organization.
///
/// Expected: Ok with exactly the two active users of the organization
#[tokio::test]
async fn returns_only_active_users_of_org() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Organization)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let org = factory::create_organization(db).await?;
    let other_org = factory::create_organization(db).await?;

    let active_a = factory::create_user(db, org.id).await?;
    let active_b = factory::create_user(db, org.id).await?;
    factory::user::UserFactory::new(db, org.id)
        .is_active(false)
        .build()
        .await?;
    factory::create_user(db, other_org.id).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_by_org_id(org.id).await?;

    assert_eq!(users.len(), 2);
    let ids: Vec<Uuid> = users.iter().map(|u| u.id).collect();
    assert!(ids.contains(&active_a.id));
    assert!(ids.contains(&active_b.id));

    Ok(())
}

/// Tests querying an organization with no users.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_org_without_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Organization)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let org = factory::create_organization(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_by_org_id(org.id).await?;

    assert!(users.is_empty());

    Ok(())
}
