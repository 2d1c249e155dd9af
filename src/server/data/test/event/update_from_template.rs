use super::*;

/// Tests patching an event from a series template.
///
/// Verifies that times and descriptive fields change, the modifier is replaced and
/// the creator is kept.
///
/// Expected: Ok with template fields applied
#[tokio::test]
async fn applies_template_and_keeps_creator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, location) = factory::helpers::create_event_dependencies(db).await?;
    let editor = factory::create_user(db).await?;
    let other_location = factory::create_location(db, &creator.email).await?;
    let event = factory::create_event(db, location.id, &creator.email).await?;

    let start = Utc.with_ymd_and_hms(2024, 6, 3, 14, 0, 0).unwrap();
    let template = EventTemplate {
        summary: "Renamed".to_string(),
        description: Some("New description".to_string()),
        facilitator: Some("Dr. Lin".to_string()),
        location_id: other_location.id,
        status: EventStatus::Cancelled,
        created_by: editor.email.clone(),
        modified_by: editor.email.clone(),
    };

    let updated = EventRepository::new(db)
        .update_from_template(event.id, start, start + Duration::minutes(90), &template)
        .await?;

    assert_eq!(updated.start_time, start);
    assert_eq!(updated.end_time, start + Duration::minutes(90));
    assert_eq!(updated.summary, "Renamed");
    assert_eq!(updated.facilitator.as_deref(), Some("Dr. Lin"));
    assert_eq!(updated.location_id, other_location.id);
    assert_eq!(updated.status, EventStatus::Cancelled);
    assert_eq!(updated.created_by, creator.email);
    assert_eq!(updated.modified_by, editor.email);

    Ok(())
}

/// Tests patching a missing event.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, location) = factory::helpers::create_event_dependencies(db).await?;
    let start = Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap();
    let template = EventTemplate {
        summary: "Missing".to_string(),
        description: None,
        facilitator: None,
        location_id: location.id,
        status: EventStatus::Tentative,
        created_by: user.email.clone(),
        modified_by: user.email,
    };

    let result = EventRepository::new(db)
        .update_from_template(404, start, start + Duration::hours(1), &template)
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
