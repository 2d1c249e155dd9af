use super::*;

/// Tests creating a series row.
///
/// Verifies that the schedule, including the weekday list, survives the round trip
/// through the JSON column.
///
/// Expected: Ok with the stored schedule equal to the input
#[tokio::test]
async fn stores_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, location) = factory::helpers::create_event_dependencies(db).await?;
    let input = params(location.id, &user.email);

    let repo = SeriesRepository::new(db);
    let created = repo.create(&input).await?;
    let reloaded = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(reloaded.title, "Soldering basics");
    assert_eq!(reloaded.schedule, input.schedule);
    assert_eq!(reloaded.created_by, user.email);
    assert_eq!(reloaded.modified_by, user.email);

    Ok(())
}

/// Tests the location foreign key on series.
///
/// Expected: Err for an unknown location
#[tokio::test]
async fn rejects_unknown_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = SeriesRepository::new(db)
        .create(&params(777, &user.email))
        .await;

    assert!(result.is_err());

    Ok(())
}
