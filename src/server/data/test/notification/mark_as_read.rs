use super::*;

/// Tests marking one notification as read.
///
/// Expected: Ok(true) and read_at set on re-fetch
#[tokio::test]
async fn marks_single_notification_read() -> Result<(), DbErr> {
    let test = notification_context().await;
    let db = test.db.as_ref().unwrap();

    let (_, user, _, _, flag) = factory::helpers::create_flag_with_dependencies(db).await?;
    let notification = factory::create_notification(db, user.id, flag.id).await?;

    let repo = NotificationRepository::new(db);
    let updated = repo.mark_as_read(notification.id).await?;
    assert!(updated);

    let listed = repo.get_by_user_id(user.id, 10).await?;
    assert!(listed[0].read_at.is_some());

    Ok(())
}

/// Tests marking an unknown notification as read.
///
/// Expected: Ok(false)
#[tokio::test]
async fn unknown_id_reports_no_update() -> Result<(), DbErr> {
    let test = notification_context().await;
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    let updated = repo.mark_as_read(uuid::Uuid::new_v4()).await?;

    assert!(!updated);

    Ok(())
}

/// Tests clearing a user's unread backlog.
///
/// Expected: Ok(3) and every notification read afterwards; other users'
/// notifications untouched
#[tokio::test]
async fn marks_all_notifications_read() -> Result<(), DbErr> {
    let test = notification_context().await;
    let db = test.db.as_ref().unwrap();

    let (org, user, _, _, flag) = factory::helpers::create_flag_with_dependencies(db).await?;
    let other_user = factory::create_user(db, org.id).await?;

    for _ in 0..3 {
        factory::create_notification(db, user.id, flag.id).await?;
    }
    factory::create_notification(db, other_user.id, flag.id).await?;

    let repo = NotificationRepository::new(db);
    let count = repo.mark_all_as_read(user.id).await?;
    assert_eq!(count, 3);

    let own = repo.get_by_user_id(user.id, 10).await?;
    assert!(own.iter().all(|n| n.read_at.is_some()));

    let others = repo.get_by_user_id(other_user.id, 10).await?;
    assert!(others[0].read_at.is_none());

    Ok(())
}
