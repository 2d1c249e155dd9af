use super::*;

/// Tests deleting an unused location.
///
/// Expected: Ok(true)
#[tokio::test]
async fn deletes_unused_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, location) = factory::helpers::create_event_dependencies(db).await?;

    let repo = LocationRepository::new(db);
    assert!(repo.delete(location.id).await?);
    assert!(repo.find_by_id(location.id).await?.is_none());

    Ok(())
}

/// Tests deleting a location still used by an event.
///
/// Expected: Err from the foreign key on `event.location_id`
#[tokio::test]
async fn fails_while_events_reference_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, location) = factory::helpers::create_event_dependencies(db).await?;
    factory::create_event(db, location.id, &user.email).await?;

    let result = LocationRepository::new(db).delete(location.id).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests deleting a missing location.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!LocationRepository::new(db).delete(8).await?);

    Ok(())
}
