use super::*;

/// Tests that logging out revokes tokens issued before the logout.
///
/// Expected: Err(AuthError::TokenRevoked)
#[tokio::test]
async fn rejects_token_issued_before_logout() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let user_id = user.id;
    let headers = bearer_for(user);

    UserRepository::new(db)
        .set_last_logout(user_id, Utc::now())
        .await?;

    let config = jwt();
    let result = AuthGuard::new(db, &config, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::TokenRevoked(id))) if id == user_id
    ));

    Ok(())
}

/// Tests that a token issued at the very instant of a logout is still revoked.
///
/// Expected: Err(AuthError::TokenRevoked)
#[tokio::test]
async fn rejects_token_issued_in_same_second_as_logout() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let user_id = user.id;
    let now = Utc::now();
    let token = issue_token(&jwt(), &User::from_entity(user).unwrap(), now).unwrap();
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );

    UserRepository::new(db).set_last_logout(user_id, now).await?;

    let config = jwt();
    let result = AuthGuard::new(db, &config, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::TokenRevoked(id))) if id == user_id
    ));

    Ok(())
}

/// Tests that a token issued after the last logout is accepted.
///
/// Expected: Ok(Claims)
#[tokio::test]
async fn accepts_token_issued_after_logout() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let after_logout = UserRepository::new(db)
        .set_last_logout(user.id, Utc::now() - Duration::hours(1))
        .await?
        .unwrap();
    let headers = bearer_for(entity::user::Model {
        token_version: after_logout.token_version,
        ..user
    });

    let config = jwt();
    let result = AuthGuard::new(db, &config, &headers).require(&[]).await;

    assert!(result.is_ok());

    Ok(())
}
