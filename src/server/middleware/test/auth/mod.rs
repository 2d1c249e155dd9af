use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::{Duration, Utc};

use crate::server::{
    config::JwtConfig,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    model::{auth::Role, user::User},
    util::token::issue_token,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn jwt() -> JwtConfig {
    JwtConfig {
        secret: "guard-test-secret".to_string(),
        issuer: "lab-scheduler".to_string(),
        ttl_seconds: 3600,
    }
}

/// Headers carrying `Authorization: Bearer <token>` for `user`, issued a minute ago.
fn bearer_for(user: entity::user::Model) -> HeaderMap {
    let user = User::from_entity(user).unwrap();
    let token = issue_token(&jwt(), &user, Utc::now() - Duration::minutes(1)).unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
