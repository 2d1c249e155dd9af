use super::*;

/// Tests detecting when an admin user exists.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_admin(db).await?;

    let result = UserRepository::new(db).admin_exists().await;

    assert!(result.is_ok());
    assert!(result.unwrap());

    Ok(())
}

/// Tests detecting when only non-admin users exist.
///
/// Verifies that staff and member roles are not mistaken for admin.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_regular_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .roles(&["staff"])
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .roles(&["member"])
        .build()
        .await?;

    let result = UserRepository::new(db).admin_exists().await;

    assert!(result.is_ok());
    assert!(!result.unwrap());

    Ok(())
}

/// Tests detecting admins in an empty database (first-time setup).
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).admin_exists().await;

    assert!(!result?);

    Ok(())
}
