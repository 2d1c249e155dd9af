use super::*;

/// Tests reading the message before it was ever set.
///
/// Expected: Ok(None)
#[tokio::test]
async fn get_returns_none_initially() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lab_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(ContactRepository::new(db).get().await?.is_none());

    Ok(())
}

/// Tests that repeated upserts keep a single row holding the latest message.
///
/// Expected: Ok with the second message and its author
#[tokio::test]
async fn second_upsert_replaces_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lab_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let repo = ContactRepository::new(db);
    repo.upsert("Ask at the front desk".to_string(), first.email.clone())
        .await?;
    let stored = repo
        .upsert("Email lab@uni.test".to_string(), second.email.clone())
        .await?;

    assert_eq!(stored.message, "Email lab@uni.test");
    assert_eq!(stored.modified_by.as_deref(), Some(second.email.as_str()));

    let reloaded = repo.get().await?.unwrap();
    assert_eq!(reloaded.message, "Email lab@uni.test");

    let rows = entity::prelude::ContactMessage::find().count(db).await?;
    assert_eq!(rows, 1);

    Ok(())
}
