use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    config::JwtConfig,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    util::{password::verify_password, token::issue_token},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies credentials and issues a bearer token.
    ///
    /// Unknown emails and wrong passwords fail the same way.
    ///
    /// # Returns
    /// - `Ok((token, User))` - Signed token and the logged-in user
    /// - `Err(AuthError::InvalidCredentials)` - Email or password did not match
    #[tracing::instrument(skip(self, password, jwt))]
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        jwt: &JwtConfig,
    ) -> Result<(String, User), AppError> {
        let email = email.trim().to_lowercase();

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = issue_token(jwt, &user, Utc::now())?;

        tracing::info!(user_id = user.id, "user logged in");

        Ok((token, user))
    }

    /// Records a logout for the user, revoking every token issued so far.
    ///
    /// # Returns
    /// - `Ok(DateTime<Utc>)` - Stored logout time
    /// - `Err(AppError::NotFound)` - User no longer exists
    pub async fn logout(&self, user_id: i32) -> Result<DateTime<Utc>, AppError> {
        let now = Utc::now();

        if UserRepository::new(self.db)
            .set_last_logout(user_id, now)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        tracing::info!(user_id, "user logged out");

        Ok(now)
    }

    /// Gets the user's last logout time, `None` if they never logged out.
    pub async fn logout_time(&self, user_id: i32) -> Result<Option<DateTime<Utc>>, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        Ok(user.last_logout_at)
    }
}
