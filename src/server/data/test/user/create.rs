use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository persists the row, marks the user active, and
/// populates the generated id.
///
/// Expected: Ok with user created and is_active true
#[tokio::test]
async fn creates_new_active_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Organization)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let org = factory::create_organization(db).await?;

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            email: "dev@example.com".to_string(),
            name: "Dev".to_string(),
            org_id: org.id,
            role: UserRole::Admin,
        })
        .await?;

    assert_ne!(user.id, Uuid::nil());
    assert_eq!(user.email, "dev@example.com");
    assert_eq!(user.role, UserRole::Admin);
    assert!(user.is_active);

    Ok(())
}
