use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::user::UserService,
};

const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

/// Installs the global tracing subscriber.
///
/// Reads the filter from `RUST_LOG`, falling back to `info,sqlx=warn`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up-to-date
/// before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seeds the bootstrap admin account when no admin exists yet.
///
/// Does nothing unless `ADMIN_EMAIL` and `ADMIN_PASSWORD` are configured. Without
/// them and without an existing admin, a warning is logged since nobody will be
/// able to manage users.
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(bootstrap) = &config.admin else {
        tracing::warn!("ADMIN_EMAIL/ADMIN_PASSWORD not set, skipping admin bootstrap");
        return Ok(());
    };

    match UserService::new(db).ensure_admin(bootstrap).await? {
        Some(user) => tracing::info!(email = %user.email, "Bootstrapped admin account"),
        None => tracing::debug!("Admin account already present"),
    }

    Ok(())
}

/// Builds the CORS layer.
///
/// With `CORS_ORIGIN` set only that origin may call the API; otherwise any origin is allowed.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let Some(origin) = &config.cors_origin else {
        return Ok(CorsLayer::permissive());
    };

    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "CORS_ORIGIN".to_string(),
            reason: e.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]))
}
