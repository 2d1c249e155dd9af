use super::*;

/// Tests deleting an existing event.
///
/// Expected: Ok(true) and the event is gone
#[tokio::test]
async fn deletes_existing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, location) = factory::helpers::create_event_dependencies(db).await?;
    let event = factory::create_event(db, location.id, &user.email).await?;

    let repo = EventRepository::new(db);
    let deleted = repo.delete(event.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(event.id).await?.is_none());

    Ok(())
}

/// Tests deleting a missing event.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = EventRepository::new(db).delete(12345).await?;

    assert!(!deleted);

    Ok(())
}
