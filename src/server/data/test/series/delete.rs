use super::*;

/// Tests deleting a series without events.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_series_without_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, location) = factory::helpers::create_event_dependencies(db).await?;
    let series = factory::create_series(db, location.id, &user.email).await?;

    let repo = SeriesRepository::new(db);
    assert!(repo.delete(series.id).await?);
    assert!(repo.find_by_id(series.id).await?.is_none());

    Ok(())
}

/// Tests that linked events block deletion of the series row.
///
/// Expected: Err from the foreign key on `event.series_id`
#[tokio::test]
async fn fails_while_events_reference_series() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, series, _) = factory::helpers::create_series_with_events(db, 2).await?;

    let result = SeriesRepository::new(db).delete(series.id).await;

    assert!(result.is_err());

    Ok(())
}
