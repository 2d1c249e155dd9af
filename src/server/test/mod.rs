use axum::{
    body::Body,
    http::{header::AUTHORIZATION, header::CONTENT_TYPE, Request, Response},
    Router,
};
use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use crate::server::{
    config::JwtConfig, model::user::User, router, state::AppState, util::token::issue_token,
};
use test_utils::{builder::TestBuilder, context::TestContext};


fn jwt() -> JwtConfig {
    JwtConfig {
        secret: "router-test-secret".to_string(),
        issuer: "lab-scheduler".to_string(),
        ttl_seconds: 3600,
    }
}

/// In-memory database with every table, plus the assembled application.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new().with_lab_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    let upload_dir = std::env::temp_dir().join(format!("lab-scheduler-router-{}", std::process::id()));
    let state = AppState::new(db, jwt(), upload_dir);

    (test, router::app(state, CorsLayer::permissive()))
}

/// Bearer token for `user`, issued a minute ago.
fn token_for(user: entity::user::Model) -> String {
    let user = User::from_entity(user).unwrap();
    issue_token(&jwt(), &user, Utc::now() - Duration::minutes(1)).unwrap()
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

fn send_json(method: &str, uri: &str, token: Option<&str>, body: String) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body)).unwrap()
}

async fn call(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn db(test: &TestContext) -> &DatabaseConnection {
    test.db.as_ref().unwrap()
}
