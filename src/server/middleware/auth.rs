use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    config::JwtConfig,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::auth::{Claims, Role},
    util::token::decode_token,
};

const BEARER_PREFIX: &str = "Bearer ";

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtConfig,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtConfig, headers: &'a HeaderMap) -> Self {
        Self { db, jwt, headers }
    }

    /// Verifies the bearer token and checks the caller holds one of `roles`.
    ///
    /// An empty `roles` slice admits any authenticated user.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Verified claims of the caller
    /// - `Err(AuthError::MissingToken)` - No `Authorization` header (403)
    /// - `Err(AuthError::MalformedHeader)` - Header is not `Bearer <token>` (400)
    /// - `Err(AuthError::InvalidToken)` - Signature, expiry or issuer check failed (400)
    /// - `Err(AuthError::UserNotInDatabase)` - Subject no longer exists (403)
    /// - `Err(AuthError::TokenRevoked)` - Token was issued before the user's last logout (403)
    /// - `Err(AuthError::AccessDenied)` - Caller holds none of `roles` (403)
    pub async fn require(&self, roles: &[Role]) -> Result<Claims, AppError> {
        let Some(header) = self.headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingToken.into());
        };

        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MalformedHeader)?;

        let claims = decode_token(self.jwt, token)?;
        let user_id = claims
            .user_id()
            .ok_or_else(|| AuthError::InvalidToken(format!("bad subject '{}'", claims.sub)))?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if claims.ver != user.token_version {
            return Err(AuthError::TokenRevoked(user_id).into());
        }

        if !claims.roles().intersects(roles) {
            let required: Vec<&str> = roles.iter().map(|r| r.as_str()).collect();
            return Err(AuthError::AccessDenied(
                user_id,
                format!("requires one of [{}]", required.join(", ")),
            )
            .into());
        }

        Ok(claims)
    }
}
