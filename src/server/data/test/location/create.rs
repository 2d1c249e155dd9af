use super::*;

/// Tests creating locations and listing them by name.
///
/// Expected: Ok with locations sorted alphabetically
#[tokio::test]
async fn creates_and_lists_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_schedule_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = LocationRepository::new(db);

    let workshop = repo.create(params("Workshop", &user.email)).await?;
    repo.create(params("Clean room", &user.email)).await?;

    assert_eq!(workshop.building.as_deref(), Some("Engineering"));
    assert_eq!(workshop.created_by, user.email);

    let names: Vec<String> = repo.get_all().await?.into_iter().map(|l| l.name).collect();
    assert_eq!(names, vec!["Clean room".to_string(), "Workshop".to_string()]);

    Ok(())
}
