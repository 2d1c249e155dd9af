use super::*;

/// Tests linking unlinked events to a series.
///
/// Expected: Ok(2) and both events returned by `get_by_series`, the third untouched
#[tokio::test]
async fn links_given_events_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, location) = factory::helpers::create_event_dependencies(db).await?;
    let series = factory::create_series(db, location.id, &user.email).await?;

    let first = factory::create_event(db, location.id, &user.email).await?;
    let second = factory::event::EventFactory::new(db, location.id, &user.email)
        .day_offset(7)
        .build()
        .await?;
    let other = factory::create_event(db, location.id, &user.email).await?;

    let repo = EventRepository::new(db);
    let linked = repo
        .connect_to_series(&[first.id, second.id], series.id)
        .await?;

    assert_eq!(linked, 2);
    let ids: Vec<i32> = repo
        .get_by_series(series.id)
        .await?
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert!(repo.find_by_id(other.id).await?.unwrap().series_id.is_none());

    Ok(())
}

/// Tests linking an empty id list.
///
/// Expected: Ok(0) without touching the database
#[tokio::test]
async fn empty_list_links_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let linked = EventRepository::new(db).connect_to_series(&[], 1).await?;

    assert_eq!(linked, 0);

    Ok(())
}
