use super::*;

/// Tests listing the flags of one document.
///
/// Creates two flags on the target document and one on another document.
///
/// Expected: Ok with exactly the target document's flags, creator resolved
#[tokio::test]
async fn lists_flags_of_document() -> Result<(), DbErr> {
    let test = flag_context().await;
    let db = test.db.as_ref().unwrap();

    let org = factory::create_organization(db).await?;
    let user = factory::create_user(db, org.id).await?;
    let workspace = factory::create_workspace(db, org.id).await?;
    let document = factory::create_document(db, workspace.id).await?;
    let other_document = factory::create_document(db, workspace.id).await?;

    let flag_a = factory::flag::FlagFactory::new(db)
        .document_id(document.id)
        .created_by(user.id)
        .build()
        .await?;
    let flag_b = factory::flag::FlagFactory::new(db)
        .document_id(document.id)
        .created_by(user.id)
        .build()
        .await?;
    factory::flag::FlagFactory::new(db)
        .document_id(other_document.id)
        .created_by(user.id)
        .build()
        .await?;

    let repo = FlagRepository::new(db);
    let flags = repo.get_by_document_id(document.id).await?;

    assert_eq!(flags.len(), 2);
    let ids: Vec<_> = flags.iter().map(|f| f.id).collect();
    assert!(ids.contains(&flag_a.id));
    assert!(ids.contains(&flag_b.id));
    assert!(flags.iter().all(|f| f.creator.is_some()));

    Ok(())
}
