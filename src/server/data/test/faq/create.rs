use super::*;

/// Tests creating a FAQ entry and listing it.
///
/// Expected: Ok with the entry present in `get_all`
#[tokio::test]
async fn creates_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lab_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = FaqRepository::new(db);

    let faq = repo
        .create(FaqParams {
            question: "Can I bring guests?".to_string(),
            answer: "Only with staff approval.".to_string(),
            actor: user.email.clone(),
        })
        .await?;

    assert_eq!(faq.question, "Can I bring guests?");
    assert_eq!(faq.created_by, user.email);

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, faq.id);

    Ok(())
}
