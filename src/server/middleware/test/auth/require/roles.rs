use super::*;

/// Tests that an empty role list admits any authenticated user.
///
/// Expected: Ok(Claims) for a member
#[tokio::test]
async fn empty_roles_admit_any_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let email = user.email.clone();
    let headers = bearer_for(user);

    let config = jwt();
    let claims = AuthGuard::new(db, &config, &headers).require(&[]).await?;

    assert_eq!(claims.email, email);
    assert!(claims.roles().contains(Role::Member));

    Ok(())
}

/// Tests that holding any one of the required roles is enough.
///
/// Expected: Ok(Claims) for a staff user when admin or staff is required
#[tokio::test]
async fn grants_access_with_one_matching_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .roles(&["staff"])
        .build()
        .await?;
    let headers = bearer_for(user);

    let config = jwt();
    let result = AuthGuard::new(db, &config, &headers)
        .require(&[Role::Admin, Role::Staff])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a member calling an admin-only operation.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_without_required_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let headers = bearer_for(user);

    let config = jwt();
    let result = AuthGuard::new(db, &config, &headers)
        .require(&[Role::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
