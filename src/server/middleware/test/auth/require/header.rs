use super::*;

/// Tests a request without an `Authorization` header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let config = jwt();
    let result = AuthGuard::new(db, &config, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a header using a scheme other than `Bearer`.
///
/// Expected: Err(AuthError::MalformedHeader)
#[tokio::test]
async fn rejects_non_bearer_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic YWRhOnB3"));
    let config = jwt();
    let result = AuthGuard::new(db, &config, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MalformedHeader))
    ));

    Ok(())
}

/// Tests a bearer value that is not a valid token.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_garbage_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer not.a.jwt"));
    let config = jwt();
    let result = AuthGuard::new(db, &config, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_token_with_wrong_signature() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let headers = bearer_for(user);

    let mut config = jwt();
    config.secret = "rotated-secret".to_string();
    let result = AuthGuard::new(db, &config, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user was deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_token_for_deleted_user() -> Result<(), AppError> {
    use sea_orm::{EntityTrait, ModelTrait};

    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let user_id = user.id;
    let headers = bearer_for(user);

    entity::prelude::User::find_by_id(user_id)
        .one(db)
        .await?
        .unwrap()
        .delete(db)
        .await?;

    let config = jwt();
    let result = AuthGuard::new(db, &config, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) if id == user_id
    ));

    Ok(())
}
