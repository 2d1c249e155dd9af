use super::*;

/// Tests updating a location.
///
/// Expected: Ok(Some) with the new name and modifier
#[tokio::test]
async fn updates_existing_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, location) = factory::helpers::create_event_dependencies(db).await?;
    let editor = factory::create_user(db).await?;

    let updated = LocationRepository::new(db)
        .update(location.id, params("Maker space", &editor.email))
        .await?
        .unwrap();

    assert_eq!(updated.name, "Maker space");
    assert_eq!(updated.created_by, creator.email);
    assert_eq!(updated.modified_by, editor.email);

    Ok(())
}

/// Tests updating a missing location.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = LocationRepository::new(db)
        .update(55, params("Ghost", &user.email))
        .await?;

    assert!(result.is_none());

    Ok(())
}
