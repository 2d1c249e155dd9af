//! HS256 bearer token issuance and verification.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::server::{
    config::JwtConfig,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::{auth::Claims, user::User},
};

/// Issues a signed token for `user`, valid for the configured lifetime from `issued_at`.
pub fn issue_token(
    config: &JwtConfig,
    user: &User,
    issued_at: DateTime<Utc>,
) -> Result<String, AppError> {
    let iat = issued_at.timestamp();
    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        name: user.name.clone(),
        app_roles: user.roles.to_tags(),
        iat,
        exp: iat + config.ttl_seconds,
        iss: config.issuer.clone(),
        ver: user.token_version,
    };

    let key = EncodingKey::from_secret(config.secret.as_bytes());
    let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &key)
        .map_err(|e| InternalError::TokenEncode(e.to_string()))?;

    Ok(token)
}

/// Verifies signature, expiry and issuer, returning the claims.
pub fn decode_token(config: &JwtConfig, token: &str) -> Result<Claims, AuthError> {
    let key = DecodingKey::from_secret(config.secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&config.issuer]);
    validation.set_required_spec_claims(&["exp", "iat", "iss"]);

    jsonwebtoken::decode::<Claims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AuthError::InvalidToken("token expired".to_string())
            }
            _ => AuthError::InvalidToken(e.to_string()),
        })
}
