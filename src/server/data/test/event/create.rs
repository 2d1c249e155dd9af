use super::*;

/// Tests creating a standalone event.
///
/// Expected: Ok with no series link and the actor as creator and modifier
#[tokio::test]
async fn creates_standalone_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, location) = factory::helpers::create_event_dependencies(db).await?;
    let start = Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap();

    let event = EventRepository::new(db)
        .create(CreateEventParams {
            location_id: location.id,
            start_time: start,
            end_time: start + Duration::hours(2),
            summary: "Open lab".to_string(),
            description: Some("Bring a laptop".to_string()),
            facilitator: None,
            status: EventStatus::Confirmed,
            series_id: None,
            created_by: user.email.clone(),
            modified_by: user.email.clone(),
        })
        .await?;

    assert_eq!(event.location_id, location.id);
    assert_eq!(event.start_time, start);
    assert_eq!(event.end_time, start + Duration::hours(2));
    assert_eq!(event.status, EventStatus::Confirmed);
    assert!(event.series_id.is_none());
    assert_eq!(event.created_by, user.email);
    assert_eq!(event.modified_by, user.email);

    Ok(())
}

/// Tests the location foreign key.
///
/// Expected: Err for a location that does not exist
#[tokio::test]
async fn rejects_unknown_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let start = Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap();

    let result = EventRepository::new(db)
        .create(CreateEventParams {
            location_id: 9999,
            start_time: start,
            end_time: start + Duration::hours(1),
            summary: "Nowhere".to_string(),
            description: None,
            facilitator: None,
            status: EventStatus::Tentative,
            series_id: None,
            created_by: user.email.clone(),
            modified_by: user.email,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
