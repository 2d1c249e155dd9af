use super::*;

/// Tests editing an announcement.
///
/// Expected: Ok(Some) with new title, body and modifier
#[tokio::test]
async fn updates_title_and_body() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lab_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let editor = factory::create_user(db).await?;
    let announcement = factory::create_announcement(db, &author.email).await?;

    let updated = AnnouncementRepository::new(db)
        .update(
            announcement.id,
            AnnouncementParams {
                title: "Lab closed Friday".to_string(),
                body: "Maintenance".to_string(),
                actor: editor.email.clone(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Lab closed Friday");
    assert_eq!(updated.body, "Maintenance");
    assert_eq!(updated.created_by, author.email);
    assert_eq!(updated.modified_by, editor.email);

    Ok(())
}

/// Tests that deleting removes the announcement and a second delete reports nothing.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn delete_is_reported_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lab_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let announcement = factory::create_announcement(db, &user.email).await?;

    let repo = AnnouncementRepository::new(db);
    assert!(repo.delete(announcement.id).await?);
    assert!(!repo.delete(announcement.id).await?);

    Ok(())
}
