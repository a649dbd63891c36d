use super::*;

/// Tests creating a notification.
///
/// Expected: Ok with the notification unread and listed for the user
#[tokio::test]
async fn creates_unread_notification() -> Result<(), DbErr> {
    let test = notification_context().await;
    let db = test.db.as_ref().unwrap();

    let (_, user, _, _, flag) = factory::helpers::create_flag_with_dependencies(db).await?;

    let repo = NotificationRepository::new(db);
    let notification = repo
        .create(CreateNotificationParam {
            user_id: user.id,
            flag_id: flag.id,
            kind: NotificationType::FlagAssigned,
            message: "You were assigned flag 'Flag'".to_string(),
        })
        .await?;

    assert!(notification.read_at.is_none());
    assert_eq!(notification.kind, NotificationType::FlagAssigned);

    let listed = repo.get_by_user_id(user.id, 10).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, notification.id);

    Ok(())
}

/// Tests that the listing honors its limit.
///
/// Expected: Ok with at most `limit` notifications
#[tokio::test]
async fn listing_honors_limit() -> Result<(), DbErr> {
    let test = notification_context().await;
    let db = test.db.as_ref().unwrap();

    let (_, user, _, _, flag) = factory::helpers::create_flag_with_dependencies(db).await?;

    for _ in 0..5 {
        factory::create_notification(db, user.id, flag.id).await?;
    }

    let repo = NotificationRepository::new(db);
    let listed = repo.get_by_user_id(user.id, 3).await?;

    assert_eq!(listed.len(), 3);

    Ok(())
}
