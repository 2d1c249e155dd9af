use super::*;

/// Tests editing a FAQ entry.
///
/// Expected: Ok(Some) with the new answer
#[tokio::test]
async fn updates_answer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lab_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let faq = factory::create_faq(db, &user.email).await?;

    let updated = FaqRepository::new(db)
        .update(
            faq.id,
            FaqParams {
                question: faq.question.clone(),
                answer: "Yes".to_string(),
                actor: user.email.clone(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.question, faq.question);
    assert_eq!(updated.answer, "Yes");

    Ok(())
}

/// Tests editing a missing FAQ entry.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lab_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = FaqRepository::new(db)
        .update(
            3,
            FaqParams {
                question: "?".to_string(),
                answer: "!".to_string(),
                actor: user.email,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
