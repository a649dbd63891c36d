use super::*;

/// Seeds one document with three flags covering distinct statuses,
/// priorities, and texts, returning the repository inputs the filter tests
/// share.
async fn seed(
    db: &sea_orm::DatabaseConnection,
) -> Result<
    (
        entity::workspace::Model,
        entity::user::Model,
        entity::flag::Model,
        entity::flag::Model,
        entity::flag::Model,
    ),
    DbErr,
> {
    let org = factory::create_organization(db).await?;
    let user = factory::create_user(db, org.id).await?;
    let workspace = factory::create_workspace(db, org.id).await?;
    let document = factory::create_document(db, workspace.id).await?;

    let resolved = factory::flag::FlagFactory::new(db)
        .document_id(document.id)
        .created_by(user.id)
        .title("Login flow screenshots outdated")
        .description("The Login page moved behind SSO and the images lag behind.")
        .priority(FlagPriority::High)
        .status(FlagStatus::Resolved)
        .build()
        .await?;
    let pending_high = factory::flag::FlagFactory::new(db)
        .document_id(document.id)
        .created_by(user.id)
        .title("API token rotation missing")
        .description("Nothing explains how LOGIN tokens are rotated quarterly.")
        .priority(FlagPriority::High)
        .status(FlagStatus::Pending)
        .build()
        .await?;
    let pending_low = factory::flag::FlagFactory::new(db)
        .document_id(document.id)
        .created_by(user.id)
        .title("Typo in glossary")
        .description("The glossary spells deployment with three e's.")
        .priority(FlagPriority::Low)
        .status(FlagStatus::Pending)
        .build()
        .await?;

    Ok((workspace, user, resolved, pending_high, pending_low))
}

/// Tests that no filters returns every flag in the store.
///
/// Expected: Ok with all three seeded flags
#[tokio::test]
async fn no_filters_returns_all_flags() -> Result<(), DbErr> {
    let test = flag_context().await;
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = FlagRepository::new(db);
    let flags = repo.get_by_filters(FlagFilters::default()).await?;

    assert_eq!(flags.len(), 3);

    Ok(())
}

/// Tests the status equality predicate.
///
/// Expected: Ok with exactly the resolved subset
#[tokio::test]
async fn status_filter_returns_exact_subset() -> Result<(), DbErr> {
    let test = flag_context().await;
    let db = test.db.as_ref().unwrap();
    let (_, _, resolved, _, _) = seed(db).await?;

    let repo = FlagRepository::new(db);
    let flags = repo
        .get_by_filters(FlagFilters {
            status: Some(FlagStatus::Resolved),
            ..Default::default()
        })
        .await?;

    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].id, resolved.id);

    Ok(())
}

/// Tests combining the case-insensitive search with a priority filter.
///
/// "login" appears in the title of one high-priority flag and in the
/// description (uppercased) of another; the low-priority flag matches
/// neither predicate pair.
///
/// Expected: Ok with both high-priority flags and only those
#[tokio::test]
async fn search_and_priority_combine_with_and() -> Result<(), DbErr> {
    let test = flag_context().await;
    let db = test.db.as_ref().unwrap();
    let (_, _, resolved, pending_high, _) = seed(db).await?;

    let repo = FlagRepository::new(db);
    let flags = repo
        .get_by_filters(FlagFilters {
            search: Some("login".to_string()),
            priority: Some(FlagPriority::High),
            ..Default::default()
        })
        .await?;

    assert_eq!(flags.len(), 2);
    let ids: Vec<_> = flags.iter().map(|f| f.id).collect();
    assert!(ids.contains(&resolved.id));
    assert!(ids.contains(&pending_high.id));

    Ok(())
}

/// Tests that the search term matches title OR description.
///
/// Expected: Ok with the description-only match included
#[tokio::test]
async fn search_matches_description_too() -> Result<(), DbErr> {
    let test = flag_context().await;
    let db = test.db.as_ref().unwrap();
    let (_, _, _, _, pending_low) = seed(db).await?;

    let repo = FlagRepository::new(db);
    let flags = repo
        .get_by_filters(FlagFilters {
            search: Some("GLOSSARY".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].id, pending_low.id);

    Ok(())
}

/// Tests the workspace predicate, which joins against the document table.
///
/// Expected: Ok with only flags whose document belongs to the workspace
#[tokio::test]
async fn workspace_filter_joins_documents() -> Result<(), DbErr> {
    let test = flag_context().await;
    let db = test.db.as_ref().unwrap();
    let (workspace, user, ..) = seed(db).await?;

    // A flag in a different workspace of the same organization.
    let other_workspace = factory::create_workspace(db, workspace.org_id).await?;
    let other_document = factory::create_document(db, other_workspace.id).await?;
    factory::flag::FlagFactory::new(db)
        .document_id(other_document.id)
        .created_by(user.id)
        .build()
        .await?;

    let repo = FlagRepository::new(db);
    let flags = repo
        .get_by_filters(FlagFilters {
            workspace_id: Some(workspace.id),
            ..Default::default()
        })
        .await?;

    assert_eq!(flags.len(), 3);
    assert!(flags.iter().all(|f| f.document_id != other_document.id));

    Ok(())
}

/// Tests the assignee equality predicate.
///
/// Expected: Ok with only the flag assigned to the user
#[tokio::test]
async fn assigned_to_filter() -> Result<(), DbErr> {
    let test = flag_context().await;
    let db = test.db.as_ref().unwrap();
    let (workspace, user, ..) = seed(db).await?;

    let assignee = factory::create_user(db, workspace.org_id).await?;
    let document = factory::create_document(db, workspace.id).await?;
    let assigned = factory::flag::FlagFactory::new(db)
        .document_id(document.id)
        .created_by(user.id)
        .assigned_to(assignee.id)
        .build()
        .await?;

    let repo = FlagRepository::new(db);
    let flags = repo
        .get_by_filters(FlagFilters {
            assigned_to: Some(assignee.id),
            ..Default::default()
        })
        .await?;

    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].id, assigned.id);
    assert_eq!(flags[0].assignee.as_ref().map(|u| u.id), Some(assignee.id));

    Ok(())
}
