use super::*;

/// Tests replacing the fields of a series.
///
/// Expected: Ok with new schedule and modifier, creator unchanged
#[tokio::test]
async fn replaces_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, location) = factory::helpers::create_event_dependencies(db).await?;
    let editor = factory::create_user(db).await?;
    let series = factory::create_series(db, location.id, &creator.email).await?;

    let mut input = params(location.id, &editor.email);
    input.title = "Advanced soldering".to_string();
    input.schedule.recurrence_frequency_weeks = 2;
    input.schedule.recurrence_frequency_days = vec![5];

    let updated = SeriesRepository::new(db).update(series.id, &input).await?;

    assert_eq!(updated.title, "Advanced soldering");
    assert_eq!(updated.schedule.recurrence_frequency_weeks, 2);
    assert_eq!(updated.schedule.recurrence_frequency_days, vec![5]);
    assert_eq!(updated.created_by, creator.email);
    assert_eq!(updated.modified_by, editor.email);

    Ok(())
}

/// Tests updating a missing series.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_series() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, location) = factory::helpers::create_event_dependencies(db).await?;

    let result = SeriesRepository::new(db)
        .update(31337, &params(location.id, &user.email))
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
