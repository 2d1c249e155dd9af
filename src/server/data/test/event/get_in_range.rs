use super::*;

/// Tests that range queries are half-open over start times.
///
/// Creates events at the range start, inside, and exactly at the range end.
///
/// Expected: the first two events, ordered by start time
#[tokio::test]
async fn returns_events_starting_in_half_open_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, location) = factory::helpers::create_event_dependencies(db).await?;
    let day = Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap();

    let late = factory::event::EventFactory::new(db, location.id, &user.email)
        .start_time(day + Duration::hours(15))
        .build()
        .await?;
    let at_start = factory::event::EventFactory::new(db, location.id, &user.email)
        .start_time(day)
        .build()
        .await?;
    factory::event::EventFactory::new(db, location.id, &user.email)
        .start_time(day + Duration::days(1))
        .build()
        .await?;

    let range = EventRange::day(day.date_naive()).unwrap();
    let events = EventRepository::new(db).get_in_range(range).await?;

    let ids: Vec<i32> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![at_start.id, late.id]);

    Ok(())
}

/// Tests an empty range result.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_when_nothing_scheduled() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, location) = factory::helpers::create_event_dependencies(db).await?;
    factory::create_event(db, location.id, &user.email).await?;

    let range = EventRange::between(
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap(),
    )
    .unwrap();
    let events = EventRepository::new(db).get_in_range(range).await?;

    assert!(events.is_empty());

    Ok(())
}
