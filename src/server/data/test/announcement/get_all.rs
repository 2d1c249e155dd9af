use super::*;

/// Tests listing announcements newest first.
///
/// Expected: Ok with the most recently created announcement first
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lab_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let older = factory::create_announcement(db, &user.email).await?;
    let newer = factory::create_announcement(db, &user.email).await?;

    let ids: Vec<i32> = AnnouncementRepository::new(db)
        .get_all()
        .await?
        .iter()
        .map(|a| a.id)
        .collect();

    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}
