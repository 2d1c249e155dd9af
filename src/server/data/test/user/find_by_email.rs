use super::*;

/// Tests finding an existing user by email.
///
/// Expected: Ok(Some(user))
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("grace@lab.test")
        .build()
        .await?;

    let found = UserRepository::new(db)
        .find_by_email("grace@lab.test")
        .await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, created.id);

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let found = UserRepository::new(db)
        .find_by_email("nobody@lab.test")
        .await?;

    assert!(found.is_none());

    Ok(())
}
