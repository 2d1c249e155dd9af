use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_ISSUER: &str = "lab-scheduler";
const DEFAULT_JWT_TTL_SECONDS: i64 = 86_400;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_ADMIN_NAME: &str = "Administrator";

/// Settings for signing and verifying bearer tokens.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub ttl_seconds: i64,
}

/// Credentials of the admin account seeded on first start.
#[derive(Clone)]
pub struct AdminBootstrap {
    pub email: String,
    pub password: String,
    pub name: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub upload_dir: String,
    pub cors_origin: Option<String>,

    pub jwt: JwtConfig,

    pub admin: Option<AdminBootstrap>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_addr = optional("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        let ttl_seconds = match optional("JWT_TTL_SECONDS") {
            Some(value) => value
                .parse::<i64>()
                .ok()
                .filter(|ttl| *ttl > 0)
                .ok_or_else(|| ConfigError::InvalidEnvVar {
                    name: "JWT_TTL_SECONDS".to_string(),
                    reason: format!("'{}' is not a positive number of seconds", value),
                })?,
            None => DEFAULT_JWT_TTL_SECONDS,
        };

        // Seeding needs both; a lone email or password is ignored.
        let admin = match (optional("ADMIN_EMAIL"), optional("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminBootstrap {
                email,
                password,
                name: optional("ADMIN_NAME").unwrap_or_else(|| DEFAULT_ADMIN_NAME.to_string()),
            }),
            _ => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_addr,
            upload_dir: optional("UPLOAD_DIR").unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
            cors_origin: optional("CORS_ORIGIN"),
            jwt: JwtConfig {
                secret: required("JWT_SECRET")?,
                issuer: optional("JWT_ISSUER").unwrap_or_else(|| DEFAULT_JWT_ISSUER.to_string()),
                ttl_seconds,
            },
            admin,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating an empty value as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
