use super::*;

/// Tests creating a new organization.
///
/// Verifies that the repository persists the row and populates the generated
/// id and creation timestamp on the returned record.
///
/// Expected: Ok with all fields round-tripped
#[tokio::test]
async fn creates_new_organization() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Organization)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrganizationRepository::new(db);
    let org = repo.create(create_param("Acme Corp", "acme-corp")).await?;

    assert_ne!(org.id, Uuid::nil());
    assert_eq!(org.name, "Acme Corp");
    assert_eq!(org.slug, "acme-corp");
    assert!(org.confluence_base_url.is_none());

    Ok(())
}

/// Tests that Confluence credentials are stored when provided.
///
/// Expected: Ok with the credential fields persisted
#[tokio::test]
async fn stores_confluence_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Organization)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrganizationRepository::new(db);
    let org = repo
        .create(CreateOrganizationParam {
            name: "Acme Corp".to_string(),
            slug: "acme-corp".to_string(),
            confluence_base_url: Some("https://acme.atlassian.net/wiki".to_string()),
            confluence_email: Some("bot@acme.com".to_string()),
            confluence_token: Some("secret".to_string()),
            confluence_space_key: Some("ENG".to_string()),
        })
        .await?;

    let stored = repo.get_by_id(org.id).await?.unwrap();
    assert_eq!(
        stored.confluence_base_url.as_deref(),
        Some("https://acme.atlassian.net/wiki")
    );
    assert_eq!(stored.confluence_space_key.as_deref(), Some("ENG"));

    Ok(())
}
