use super::*;

/// Tests creating a user with roles.
///
/// Verifies that the repository stores the email, name, hash and roles and that
/// no logout has been recorded yet.
///
/// Expected: Ok with matching fields
#[tokio::test]
async fn creates_user_with_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(
            "ada@lab.test",
            "Ada",
            "$argon2id$hash",
            &RoleSet::new(&[Role::Staff, Role::Member]),
        )
        .await?;

    assert_eq!(user.email, "ada@lab.test");
    assert_eq!(user.name, "Ada");
    assert_eq!(user.password_hash, "$argon2id$hash");
    assert!(user.roles.contains(Role::Staff));
    assert!(user.roles.contains(Role::Member));
    assert!(!user.roles.contains(Role::Admin));
    assert!(user.last_logout_at.is_none());

    Ok(())
}

/// Tests the unique constraint on email.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let roles = RoleSet::new(&[Role::Member]);
    repo.create("dup@lab.test", "First", "", &roles).await?;

    let result = repo.create("dup@lab.test", "Second", "", &roles).await;

    assert!(result.is_err());

    Ok(())
}
