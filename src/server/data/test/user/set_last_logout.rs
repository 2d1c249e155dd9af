use super::*;
use chrono::{TimeZone, Utc};

/// Tests recording a logout time.
///
/// Expected: Ok(Some) with the timestamp stored and the token version bumped
#[tokio::test]
async fn stores_logout_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let at = Utc.with_ymd_and_hms(2024, 6, 3, 12, 30, 0).unwrap();

    let repo = UserRepository::new(db);
    let stored = repo.set_last_logout(user.id, at).await?.unwrap();

    assert_eq!(stored.token_version, user.token_version + 1);
    let reloaded = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(reloaded.last_logout_at, Some(at));
    assert_eq!(reloaded.token_version, stored.token_version);

    Ok(())
}

/// Tests recording a logout for a missing user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = UserRepository::new(db)
        .set_last_logout(42, Utc::now())
        .await?;

    assert!(stored.is_none());

    Ok(())
}
