use super::*;

/// Tests replacing a user's roles.
///
/// Expected: Ok(Some(user)) holding only the new roles
#[tokio::test]
async fn replaces_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update_roles(user.id, &RoleSet::new(&[Role::Admin]))
        .await?
        .unwrap();

    assert!(updated.roles.contains(Role::Admin));
    assert!(!updated.roles.contains(Role::Member));

    let reloaded = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert_eq!(reloaded.roles, updated.roles);

    Ok(())
}

/// Tests updating roles of a missing user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update_roles(999, &RoleSet::new(&[Role::Staff]))
        .await?;

    assert!(result.is_none());

    Ok(())
}
